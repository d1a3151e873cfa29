use anyhow::Result;
use dec2bin::utils::validation::Validate;
use dec2bin::{ConversionEngine, Converter, JsonRenderer, OutputFormat, TextRenderer, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_settings_file_drives_the_engine() -> Result<()> {
    let mut settings_file = NamedTempFile::new()?;
    settings_file.write_all(
        br#"
[limits]
max_value = 100
max_fraction_bits = 8
headline_chars = 5
trace_fraction_steps = 3

[output]
format = "text"
show_trace = true
"#,
    )?;

    let settings = TomlConfig::from_file(settings_file.path())?;
    settings.validate()?;
    assert_eq!(settings.output_format(), OutputFormat::Text);

    let engine = ConversionEngine::new(
        Converter::new(settings.limits()),
        TextRenderer::new(settings.show_trace()),
    );
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = engine.run(["0.1", "101", "3"], &mut out, &mut err)?;

    assert_eq!(summary.converted, 2);
    assert_eq!(summary.rejected, 1);

    let out = String::from_utf8(out)?;
    assert!(out.starts_with("0.1 → 0.0001... (truncated)\n"));
    assert_eq!(out.matches("→ take").count(), 3);
    assert!(out.contains("... (continues)"));
    assert!(out.ends_with("3 → 11\n"));

    let err = String::from_utf8(err)?;
    assert!(err.starts_with("101: Number too large"));
    Ok(())
}

#[test]
fn test_json_output_one_object_per_line() -> Result<()> {
    let engine = ConversionEngine::new(Converter::default(), JsonRenderer);
    let mut out = Vec::new();
    let mut err = Vec::new();
    engine.run(["15.625", "255"], &mut out, &mut err)?;

    let out = String::from_utf8(out)?;
    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(serde_json::from_str)
        .collect::<std::result::Result<_, _>>()?;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["binary"], "1111.101");
    assert_eq!(lines[0]["fractional_steps"][0]["bit"], 1);
    assert_eq!(lines[1]["binary"], "11111111");
    assert!(lines[1]["integer_steps"].as_array().is_some_and(Vec::is_empty));
    assert!(err.is_empty());
    Ok(())
}

#[test]
fn test_invalid_settings_are_rejected() -> Result<()> {
    let settings = TomlConfig::from_toml_str("[limits]\nmax_fraction_bits = 0\n")?;
    assert!(settings.validate().is_err());
    Ok(())
}
