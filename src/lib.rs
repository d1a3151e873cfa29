pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, OutputFormat};
pub use crate::core::{
    converter::{convert, Converter},
    engine::{BatchSummary, ConversionEngine},
    render::{JsonRenderer, TextRenderer},
};
pub use domain::model::{
    ConversionError, ConversionLimits, ConversionResult, ConversionTrace, DecimalLiteral,
    FractionalStep, IntegerStep,
};
pub use utils::error::{Dec2BinError, Result};
