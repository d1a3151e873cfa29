use crate::domain::model::ConversionResult;
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use std::fmt::Write;

/// Headline plus the division and multiplication steps, one per line.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    show_trace: bool,
}

impl TextRenderer {
    pub fn new(show_trace: bool) -> Self {
        Self { show_trace }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Renderer for TextRenderer {
    fn render(&self, result: &ConversionResult) -> Result<String> {
        let mut out = format!("{} → {}", result.literal, result.binary);
        if result.truncated {
            out.push_str(" (truncated)");
        }

        if !self.show_trace || result.integer_steps.is_empty() {
            return Ok(out);
        }

        // Writing into a String cannot fail.
        let _ = write!(out, "\nInteger part ({}):", result.literal.integer_digits);
        for step in &result.integer_steps {
            let _ = write!(
                out,
                "\n  {} ÷ 2 = {} (remainder {})",
                step.dividend, step.quotient, step.remainder
            );
        }

        if !result.fractional_steps.is_empty() {
            let digits = result.literal.fractional_digits.as_deref().unwrap_or_default();
            let _ = write!(out, "\nFractional part (0.{digits}):");
            for step in &result.fractional_steps {
                let _ = write!(out, "\n  {} → take {}", step.display_value(), step.bit);
            }
            if result.fraction_continues {
                out.push_str("\n  ... (continues)");
            }
        }

        Ok(out)
    }
}

/// One JSON object per conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, result: &ConversionResult) -> Result<String> {
        Ok(serde_json::to_string(result)?)
    }
}
