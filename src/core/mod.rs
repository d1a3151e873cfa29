pub mod converter;
pub mod engine;
pub mod parser;
pub mod render;
pub mod samples;

pub use crate::domain::model::{
    ConversionError, ConversionLimits, ConversionResult, ConversionTrace, DecimalLiteral,
    FractionExpansion, FractionalStep, IntegerStep,
};
pub use crate::domain::ports::Renderer;
pub use crate::utils::error::Result;
