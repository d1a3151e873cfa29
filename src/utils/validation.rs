use crate::utils::error::{Dec2BinError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(Dec2BinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // Written so that NaN falls outside every range.
    if !(value >= min && value <= max) {
        return Err(Dec2BinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(Dec2BinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("limits.headline_chars", 12, 2).is_ok());
        assert!(validate_positive_number("limits.headline_chars", 1, 2).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("limits.max_fraction_bits", 16, 1, 52).is_ok());
        assert!(validate_range("limits.max_fraction_bits", 0, 1, 52).is_err());
        assert!(validate_range("limits.max_fraction_bits", 53, 1, 52).is_err());
        assert!(validate_range("limits.max_value", f64::NAN, 1.0, 1e6).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["text", "json"]).is_err());
    }
}
