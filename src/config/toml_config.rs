use crate::config::OutputFormat;
use crate::domain::model::ConversionLimits;
use crate::utils::error::{Dec2BinError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_value: Option<f64>,
    pub max_fraction_bits: Option<usize>,
    pub headline_chars: Option<usize>,
    pub trace_fraction_steps: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub show_trace: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(Dec2BinError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| Dec2BinError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAX_VALUE})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        let limits = self.limits();

        validation::validate_range("limits.max_value", limits.max_value, 1.0, MAX_EXACT_INTEGER)?;
        validation::validate_range("limits.max_fraction_bits", limits.max_fraction_bits, 1, 52)?;
        validation::validate_positive_number("limits.headline_chars", limits.headline_chars, 2)?;
        validation::validate_range(
            "limits.trace_fraction_steps",
            limits.trace_fraction_steps,
            1,
            limits.max_fraction_bits,
        )?;

        if let Some(format) = &self.output.format {
            validation::validate_one_of("output.format", format, OutputFormat::NAMES)?;
        }

        Ok(())
    }

    /// 未設定的項目使用預設值
    pub fn limits(&self) -> ConversionLimits {
        let defaults = ConversionLimits::default();
        ConversionLimits {
            max_value: self.limits.max_value.unwrap_or(defaults.max_value),
            max_fraction_bits: self
                .limits
                .max_fraction_bits
                .unwrap_or(defaults.max_fraction_bits),
            headline_chars: self.limits.headline_chars.unwrap_or(defaults.headline_chars),
            trace_fraction_steps: self
                .limits
                .trace_fraction_steps
                .unwrap_or(defaults.trace_fraction_steps),
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .format
            .as_deref()
            .and_then(|format| format.parse().ok())
            .unwrap_or_default()
    }

    pub fn show_trace(&self) -> bool {
        self.output.show_trace.unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
