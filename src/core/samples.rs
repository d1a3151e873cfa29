/// Example values offered next to the input field.
pub const SAMPLE_INPUTS: &[&str] = &[
    "10", "27.75", "3.14159", "255", "42.125", "7.5", "0.875", "15.625",
];

/// Value shown when the page first loads.
pub const DEFAULT_SAMPLE: &str = "15.625";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::convert;

    #[test]
    fn test_samples_all_convert() {
        for sample in SAMPLE_INPUTS {
            assert!(convert(sample).is_ok(), "sample {sample} should convert");
        }
        assert!(SAMPLE_INPUTS.contains(&DEFAULT_SAMPLE));
    }

    #[test]
    fn test_default_sample_leads_interactive_input() {
        use crate::core::converter::Converter;
        use crate::core::engine::ConversionEngine;
        use crate::core::render::TextRenderer;
        use std::io::{Cursor, Read};

        let engine = ConversionEngine::new(Converter::default(), TextRenderer::new(false));
        let typed: &[u8] = b"2\n";
        let reader = Cursor::new(format!("{DEFAULT_SAMPLE}\n")).chain(typed);
        let mut out = Vec::new();
        let mut err = Vec::new();
        engine.run_reader(reader, &mut out, &mut err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "15.625 → 1111.101\n2 → 10\n");
    }
}
