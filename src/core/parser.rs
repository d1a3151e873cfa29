use crate::domain::model::{ConversionError, DecimalLiteral, MAX_VALUE};
use regex::Regex;
use std::sync::LazyLock;

// Digits, optionally followed by a point and more digits, or a point followed by digits.
static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?(?:([0-9]+)(?:\.([0-9]*))?|\.([0-9]+))$").expect("decimal literal pattern")
});

/// Parses a non-negative decimal literal, rejecting values above 1,000,000.
pub fn parse(text: &str) -> Result<DecimalLiteral, ConversionError> {
    parse_with_limit(text, MAX_VALUE)
}

/// Parses a non-negative decimal literal, rejecting values above `max_value`.
///
/// Surrounding whitespace and a leading `+` are dropped, and a leading `.`
/// gets an implicit `0` integer part.
pub fn parse_with_limit(text: &str, max_value: f64) -> Result<DecimalLiteral, ConversionError> {
    let trimmed = text.trim();
    let invalid = || ConversionError::InvalidFormat {
        input: trimmed.to_string(),
    };

    let caps = DECIMAL_RE.captures(trimmed).ok_or_else(invalid)?;

    let integer_digits = caps.get(1).map_or("0", |m| m.as_str()).to_string();
    let fractional_digits = caps
        .get(2)
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().to_string());

    let literal = DecimalLiteral {
        integer_digits,
        fractional_digits,
    };

    let value = numeric_value(&literal).ok_or_else(invalid)?;
    if value > max_value {
        return Err(ConversionError::OutOfRange {
            value,
            max: max_value,
        });
    }

    Ok(literal)
}

fn numeric_value(literal: &DecimalLiteral) -> Option<f64> {
    let fraction = literal
        .fractional_digits
        .as_deref()
        .filter(|digits| !digits.is_empty())
        .unwrap_or("0");
    format!("{}.{}", literal.integer_digits, fraction)
        .parse::<f64>()
        .ok()
}
