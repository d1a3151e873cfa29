use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Largest accepted input value.
pub const MAX_VALUE: f64 = 1_000_000.0;
/// Fractional bits computed before giving up on a terminating expansion.
pub const MAX_FRACTION_BITS: usize = 16;
/// Length of the headline fraction (leading `.` included) once it is truncated.
pub const HEADLINE_CHARS: usize = 12;
/// Multiplication steps shown in the trace.
pub const TRACE_FRACTION_STEPS: usize = 6;

/// A validated, non-negative decimal literal split at the decimal point.
///
/// `fractional_digits` is `None` for a bare integer such as `42`, and
/// `Some("")` for a literal with a trailing point such as `42.`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalLiteral {
    pub integer_digits: String,
    pub fractional_digits: Option<String>,
}

impl DecimalLiteral {
    /// The fraction was written out but is zero (`5.0`, `5.00`). Both render
    /// as `.0` and get no trace.
    pub fn has_zero_fraction(&self) -> bool {
        self.fractional_digits
            .as_deref()
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b == b'0'))
    }
}

impl std::fmt::Display for DecimalLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.fractional_digits {
            Some(fraction) => write!(f, "{}.{}", self.integer_digits, fraction),
            None => write!(f, "{}", self.integer_digits),
        }
    }
}

/// One division-by-two step of the integer part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerStep {
    pub dividend: u64,
    pub quotient: u64,
    pub remainder: u8,
}

/// One multiply-by-two step of the fractional part.
///
/// Serialises the raw `doubled` value alongside its four-decimal `display` form.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FractionalStep {
    /// The doubled value, before the extracted bit is subtracted.
    pub doubled: f64,
    pub bit: u8,
}

impl FractionalStep {
    pub fn display_value(&self) -> String {
        format!("{:.4}", self.doubled)
    }
}

impl Serialize for FractionalStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FractionalStep", 3)?;
        state.serialize_field("doubled", &self.doubled)?;
        state.serialize_field("display", &self.display_value())?;
        state.serialize_field("bit", &self.bit)?;
        state.end()
    }
}

/// Output of the repeated-multiplication expansion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FractionExpansion {
    /// `.` followed by the emitted bits, or empty when nothing was emitted.
    pub bits: String,
    /// `bits`, shortened for the headline when the expansion was truncated.
    pub headline: String,
    pub steps: Vec<FractionalStep>,
    pub truncated: bool,
}

/// Step lists shown to the user.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConversionTrace {
    pub integer_steps: Vec<IntegerStep>,
    pub fractional_steps: Vec<FractionalStep>,
    /// More multiplications follow the last shown fractional step.
    pub fraction_continues: bool,
}

impl ConversionTrace {
    pub fn is_empty(&self) -> bool {
        self.integer_steps.is_empty() && self.fractional_steps.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub literal: DecimalLiteral,
    pub binary: String,
    pub integer_steps: Vec<IntegerStep>,
    pub fractional_steps: Vec<FractionalStep>,
    pub fraction_continues: bool,
    pub truncated: bool,
}

/// Numeric ceilings used by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionLimits {
    pub max_value: f64,
    pub max_fraction_bits: usize,
    pub headline_chars: usize,
    pub trace_fraction_steps: usize,
}

impl Default for ConversionLimits {
    fn default() -> Self {
        Self {
            max_value: MAX_VALUE,
            max_fraction_bits: MAX_FRACTION_BITS,
            headline_chars: HEADLINE_CHARS,
            trace_fraction_steps: TRACE_FRACTION_STEPS,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("invalid decimal number: {input:?}")]
    InvalidFormat { input: String },

    #[error("number too large: {value} exceeds {max}")]
    OutOfRange { value: f64, max: f64 },
}
