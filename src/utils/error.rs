use crate::domain::model::ConversionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Dec2BinError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl Dec2BinError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Dec2BinError::Conversion(ConversionError::InvalidFormat { .. }) => {
                "Please enter a valid positive decimal number (e.g., 42, 15.625, or .75)"
                    .to_string()
            }
            Dec2BinError::Conversion(ConversionError::OutOfRange { max, .. }) => {
                format!("Number too large. Please enter a number no greater than {max}")
            }
            Dec2BinError::IoError(e) => format!("Could not read or write data: {e}"),
            Dec2BinError::SerializationError(e) => format!("Could not format the result: {e}"),
            Dec2BinError::ConfigError { message } => format!("Settings file is invalid: {message}"),
            Dec2BinError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{field}' is invalid: {reason}")
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Dec2BinError::Conversion(ConversionError::InvalidFormat { .. }) => {
                "Use digits with at most one decimal point, without signs or exponents"
            }
            Dec2BinError::Conversion(ConversionError::OutOfRange { .. }) => {
                "Enter a smaller number or raise limits.max_value in the settings file"
            }
            Dec2BinError::IoError(_) => "Check that the file exists and is readable",
            Dec2BinError::SerializationError(_) => "Try the text output format",
            Dec2BinError::ConfigError { .. } | Dec2BinError::InvalidConfigValueError { .. } => {
                "Fix the settings file or run without --config to use the defaults"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Dec2BinError::Conversion(_) => 1,
            Dec2BinError::ConfigError { .. } | Dec2BinError::InvalidConfigValueError { .. } => 2,
            Dec2BinError::IoError(_) | Dec2BinError::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, Dec2BinError>;
