use crate::areas::session::Session;
use crate::artifacts::similarity::{similarity_bounded, similarity_bytes_bounded};
use std::path::Path;

/// Operands of the similarity command
pub enum SimilarityInput<'a> {
    Strings(&'a str, &'a str),
    Files(&'a Path, &'a Path),
}

impl Session {
    /// Prints the similarity ratio of two inputs with six decimals
    pub fn similarity(&self, input: SimilarityInput<'_>, lower_bound: f64) -> anyhow::Result<f64> {
        let ratio = match input {
            SimilarityInput::Strings(a, b) => similarity_bounded(a, b, lower_bound)?,
            SimilarityInput::Files(a, b) => {
                let a = self.workspace().read_bytes(a)?;
                let b = self.workspace().read_bytes(b)?;
                similarity_bytes_bounded(&a, &b, lower_bound)?
            }
        };

        writeln!(self.writer(), "{ratio:.6}")?;

        Ok(ratio)
    }
}
