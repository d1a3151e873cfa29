use crate::domain::model::ConversionResult;
use crate::utils::error::Result;

/// Turns a finished conversion into printable output.
pub trait Renderer: Send + Sync {
    fn render(&self, result: &ConversionResult) -> Result<String>;
}
