use crate::core::parser;
use crate::domain::model::{
    ConversionError, ConversionLimits, ConversionResult, ConversionTrace, DecimalLiteral,
    FractionExpansion, FractionalStep, IntegerStep,
};

/// Decimal to binary converter with step tracing.
///
/// Integer parts go through repeated division by two, fractional parts through
/// repeated multiplication by two. Integers are held in a `u64` and fractions
/// in an `f64`, so inputs far beyond the default range lose precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    limits: ConversionLimits,
}

impl Converter {
    pub fn new(limits: ConversionLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ConversionLimits {
        &self.limits
    }

    pub fn parse(&self, text: &str) -> Result<DecimalLiteral, ConversionError> {
        parser::parse_with_limit(text, self.limits.max_value)
    }

    /// Parses `text` and converts it. Nothing is computed for rejected input.
    pub fn convert(&self, text: &str) -> Result<ConversionResult, ConversionError> {
        let literal = self.parse(text)?;

        if let Some(fraction) = &literal.fractional_digits {
            return Ok(self.convert_with_fraction(&literal.integer_digits, fraction));
        }

        Ok(ConversionResult {
            binary: self.convert_integer(&literal.integer_digits),
            literal,
            integer_steps: Vec::new(),
            fractional_steps: Vec::new(),
            fraction_continues: false,
            truncated: false,
        })
    }

    /// Binary digits of a decimal integer; `"0"` for zero.
    pub fn convert_integer(&self, digits: &str) -> String {
        divide_by_two(integer_value(digits)).0
    }

    /// Expands `0.<digits>` into binary, stopping when the value reaches zero
    /// or after `max_fraction_bits` bits.
    pub fn convert_fraction(&self, digits: &str) -> FractionExpansion {
        let mut fraction = fraction_value(digits);
        if fraction == 0.0 {
            return FractionExpansion::default();
        }

        let mut bits = String::from(".");
        let mut steps = Vec::with_capacity(self.limits.max_fraction_bits);

        for _ in 0..self.limits.max_fraction_bits {
            let doubled = fraction * 2.0;
            let bit = u8::from(doubled >= 1.0);
            fraction = doubled - f64::from(bit);

            bits.push(if bit == 1 { '1' } else { '0' });
            steps.push(FractionalStep { doubled, bit });

            if fraction == 0.0 {
                break;
            }
        }

        let truncated = fraction != 0.0;
        let headline = if truncated && bits.len() > self.limits.headline_chars {
            format!("{}...", &bits[..self.limits.headline_chars])
        } else {
            bits.clone()
        };

        FractionExpansion {
            bits,
            headline,
            steps,
            truncated,
        }
    }

    /// Converts a literal that was written with a decimal point.
    pub fn convert_with_fraction(
        &self,
        integer_digits: &str,
        fractional_digits: &str,
    ) -> ConversionResult {
        let integer_digits = if integer_digits.is_empty() {
            "0"
        } else {
            integer_digits
        };
        let literal = DecimalLiteral {
            integer_digits: integer_digits.to_string(),
            fractional_digits: Some(fractional_digits.to_string()),
        };
        let integer_binary = self.convert_integer(integer_digits);

        if literal.has_zero_fraction() {
            return ConversionResult {
                binary: format!("{integer_binary}.0"),
                literal,
                integer_steps: Vec::new(),
                fractional_steps: Vec::new(),
                fraction_continues: false,
                truncated: false,
            };
        }

        let expansion = self.convert_fraction(fractional_digits);
        let trace = self.assemble_trace(integer_value(integer_digits), &expansion);

        ConversionResult {
            binary: format!("{integer_binary}{}", expansion.headline),
            literal,
            integer_steps: trace.integer_steps,
            fractional_steps: trace.fractional_steps,
            fraction_continues: trace.fraction_continues,
            truncated: expansion.truncated,
        }
    }

    /// Steps shown to the user for a literal.
    ///
    /// Bare integers and literals with an all-zero fraction get no steps. The
    /// fractional list is capped at `trace_fraction_steps` entries.
    pub fn build_trace(
        &self,
        integer_digits: &str,
        fractional_digits: Option<&str>,
    ) -> ConversionTrace {
        let Some(fraction) = fractional_digits else {
            return ConversionTrace::default();
        };
        // Any all-zero fraction counts as a simple integer, `5.00` included.
        if !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') {
            return ConversionTrace::default();
        }

        let expansion = self.convert_fraction(fraction);
        self.assemble_trace(integer_value(integer_digits), &expansion)
    }

    fn assemble_trace(&self, integer: u64, expansion: &FractionExpansion) -> ConversionTrace {
        let integer_steps = if integer == 0 {
            vec![IntegerStep {
                dividend: 0,
                quotient: 0,
                remainder: 0,
            }]
        } else {
            divide_by_two(integer).1
        };

        let cap = self.limits.trace_fraction_steps;
        let computed = expansion.steps.len();

        ConversionTrace {
            integer_steps,
            fractional_steps: expansion.steps[..computed.min(cap)].to_vec(),
            fraction_continues: computed > cap || (computed == cap && expansion.truncated),
        }
    }
}

/// Converts `text` with the default limits.
pub fn convert(text: &str) -> Result<ConversionResult, ConversionError> {
    Converter::default().convert(text)
}

fn divide_by_two(value: u64) -> (String, Vec<IntegerStep>) {
    if value == 0 {
        return ("0".to_string(), Vec::new());
    }

    let mut steps = Vec::new();
    let mut dividend = value;
    while dividend > 0 {
        let quotient = dividend / 2;
        steps.push(IntegerStep {
            dividend,
            quotient,
            remainder: u8::from(dividend % 2 == 1),
        });
        dividend = quotient;
    }

    // Last remainder is the most significant bit.
    let binary = steps
        .iter()
        .rev()
        .map(|step| if step.remainder == 1 { '1' } else { '0' })
        .collect();

    (binary, steps)
}

fn integer_value(digits: &str) -> u64 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

fn fraction_value(digits: &str) -> f64 {
    if digits.is_empty() {
        return 0.0;
    }
    format!("0.{digits}").parse::<f64>().unwrap_or(0.0)
}
