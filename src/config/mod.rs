pub mod toml_config;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "dec2bin")]
#[command(about = "Convert decimal numbers to binary and show the working")]
pub struct CliConfig {
    /// Decimal numbers to convert; lines are read from stdin when none are given
    pub values: Vec<String>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Output format, overriding the settings file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print only the binary result, without the step trace
    #[arg(long)]
    pub no_trace: bool,

    /// Convert the built-in example values
    #[arg(long)]
    pub samples: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}
