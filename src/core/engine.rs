use crate::core::converter::Converter;
use crate::domain::model::ConversionResult;
use crate::domain::ports::Renderer;
use crate::utils::error::{Dec2BinError, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn is_clean(&self) -> bool {
        self.rejected == 0
    }
}

/// Runs inputs through the converter and writes rendered results.
pub struct ConversionEngine<R: Renderer> {
    converter: Converter,
    renderer: R,
}

impl<R: Renderer> ConversionEngine<R> {
    pub fn new(converter: Converter, renderer: R) -> Self {
        Self {
            converter,
            renderer,
        }
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn convert_one(&self, input: &str) -> Result<ConversionResult> {
        match self.converter.convert(input) {
            Ok(result) => {
                tracing::debug!(
                    "Converted {} -> {} ({} integer steps, {} fractional steps, truncated: {})",
                    result.literal,
                    result.binary,
                    result.integer_steps.len(),
                    result.fractional_steps.len(),
                    result.truncated
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!("Rejected input {:?}: {}", input.trim(), e);
                Err(e.into())
            }
        }
    }

    /// Converts every non-blank input. Rendered results go to `out`, rejected
    /// inputs are reported on `err` and do not stop the batch.
    pub fn run<I, S, O, E>(&self, inputs: I, out: &mut O, err: &mut E) -> Result<BatchSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        O: Write,
        E: Write,
    {
        tracing::info!("Starting conversion run");
        let mut summary = BatchSummary::default();

        for input in inputs {
            self.process(input.as_ref(), out, err, &mut summary)?;
        }

        Ok(finish(summary))
    }

    /// Like [`run`](Self::run), one input per line of `reader`.
    ///
    /// Lines that are not valid UTF-8 are reported as rejected inputs. Read
    /// failures end the run with an IO error.
    pub fn run_reader<B, O, E>(&self, reader: B, out: &mut O, err: &mut E) -> Result<BatchSummary>
    where
        B: BufRead,
        O: Write,
        E: Write,
    {
        tracing::info!("Starting conversion run");
        let mut summary = BatchSummary::default();

        for line in reader.split(b'\n') {
            let line = line?;
            self.process(&String::from_utf8_lossy(&line), out, err, &mut summary)?;
        }

        Ok(finish(summary))
    }

    fn process<O, E>(
        &self,
        input: &str,
        out: &mut O,
        err: &mut E,
        summary: &mut BatchSummary,
    ) -> Result<()>
    where
        O: Write,
        E: Write,
    {
        if input.trim().is_empty() {
            return Ok(());
        }

        match self.convert_one(input) {
            Ok(result) => {
                writeln!(out, "{}", self.renderer.render(&result)?)?;
                summary.converted += 1;
            }
            Err(e @ Dec2BinError::Conversion(_)) => {
                writeln!(err, "{}: {}", input.trim(), e.user_friendly_message())?;
                summary.rejected += 1;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }
}

fn finish(summary: BatchSummary) -> BatchSummary {
    tracing::info!(
        "Conversion run finished: {} converted, {} rejected",
        summary.converted,
        summary.rejected
    );
    summary
}
