use anyhow::Result;
use dec2bin::core::parser::parse;
use dec2bin::{convert, ConversionError, Converter, IntegerStep};

#[test]
fn test_integers_round_trip() -> Result<()> {
    let converter = Converter::default();
    for n in [0u64, 1, 2, 3, 10, 255, 256, 1023, 65_535, 999_999, 1_000_000] {
        let binary = converter.convert_integer(&n.to_string());
        assert_eq!(u64::from_str_radix(&binary, 2)?, n, "n = {n}");
    }
    assert_eq!(convert("10")?.binary, "1010");
    Ok(())
}

#[test]
fn test_terminating_fractions() -> Result<()> {
    let result = convert("0.875")?;
    assert_eq!(result.binary, "0.111");
    assert_eq!(result.fractional_steps.len(), 3);
    assert!(!result.truncated);

    assert_eq!(convert("27.75")?.binary, "11011.11");
    Ok(())
}

#[test]
fn test_non_terminating_fraction_is_capped() -> Result<()> {
    let result = convert("3.14159")?;
    assert!(result.binary.starts_with("11."));
    assert!(result.binary.ends_with("..."));
    // "11" + 12 headline characters + "..."
    assert_eq!(result.binary.len(), 2 + 12 + 3);
    assert!(result.truncated);

    let expansion = Converter::default().convert_fraction("14159");
    assert_eq!(expansion.steps.len(), 16);
    Ok(())
}

#[test]
fn test_explicit_zero_fraction_is_kept() -> Result<()> {
    assert_eq!(convert("5.0")?.binary, "101.0");
    assert_eq!(convert("5")?.binary, "101");
    Ok(())
}

#[test]
fn test_grammar_rejections() {
    for input in ["abc", "1.2.3", "-5", ""] {
        assert!(
            matches!(convert(input), Err(ConversionError::InvalidFormat { .. })),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn test_range_rejection() {
    assert!(matches!(
        convert("1000001"),
        Err(ConversionError::OutOfRange { .. })
    ));
    assert!(convert("1000000").is_ok());
}

#[test]
fn test_parse_normalisation() -> Result<()> {
    assert_eq!(parse("+42")?, parse("42")?);
    assert_eq!(parse(".75")?, parse("0.75")?);
    assert_eq!(convert(".75")?.binary, convert("0.75")?.binary);
    Ok(())
}

#[test]
fn test_trace_only_for_literals_with_a_point() -> Result<()> {
    let bare = convert("27")?;
    assert_eq!(bare.binary, "11011");
    assert!(bare.integer_steps.is_empty());
    assert!(bare.fractional_steps.is_empty());

    let with_fraction = convert("27.75")?;
    assert_eq!(with_fraction.integer_steps.len(), 5);
    assert_eq!(
        with_fraction.integer_steps.first(),
        Some(&IntegerStep {
            dividend: 27,
            quotient: 13,
            remainder: 1
        })
    );
    assert_eq!(with_fraction.fractional_steps.len(), 2);
    Ok(())
}

#[test]
fn test_conversion_is_deterministic() -> Result<()> {
    assert_eq!(convert("42.125")?, convert("42.125")?);
    Ok(())
}
