//! The generative-text seam.
//!
//! The engine only needs `prompt + temperature -> text`. Backends live in the
//! runtime crate; tests use closures.

use ndl_foundation::Result;

/// A synchronous generative-text backend.
pub trait Generator {
    /// Generates text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns a `GeneratorFailure` error if the backend cannot produce text.
    fn generate(&self, prompt: &str, temperature: f32) -> Result<String>;
}

impl<F> Generator for F
where
    F: Fn(&str, f32) -> Result<String>,
{
    fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        self(prompt, temperature)
    }
}
