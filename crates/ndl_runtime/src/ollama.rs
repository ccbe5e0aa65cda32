//! Generative backends for fallback rules.

use std::time::Duration;

use ndl_engine::Generator;
use ndl_foundation::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GeneratorConfig;

/// Generator backed by an Ollama server's `/api/generate` endpoint.
pub struct OllamaGenerator {
    client: reqwest::blocking::Client,
    model: String,
    base_url: String,
}

impl OllamaGenerator {
    /// Creates a generator from configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the HTTP client cannot be built.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl Generator for OllamaGenerator {
    fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions { temperature },
        };

        debug!(model = %self.model, temperature, "requesting generation");
        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .map_err(|e| {
                Error::generator(format!(
                    "failed to reach Ollama at {}: {e}. Make sure Ollama is running.",
                    self.base_url
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Error::generator(format!("Ollama API error ({status}): {body}")));
        }

        let body: GenerateResponse = response
            .json()
            .map_err(|e| Error::generator(format!("unreadable Ollama response: {e}")))?;
        Ok(body.response.trim().to_string())
    }
}

/// Generator used with `--offline` or `enabled = false`; always fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineGenerator;

impl Generator for OfflineGenerator {
    fn generate(&self, _prompt: &str, _temperature: f32) -> Result<String> {
        Err(Error::generator("generative backend is disabled"))
    }
}

/// The backend selected by configuration.
pub enum Backend {
    /// Talks to Ollama.
    Ollama(OllamaGenerator),
    /// Fails every request.
    Offline(OfflineGenerator),
}

impl Backend {
    /// Picks a backend for the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the Ollama client cannot be built.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        if config.enabled {
            OllamaGenerator::new(config).map(Self::Ollama)
        } else {
            Ok(Self::Offline(OfflineGenerator))
        }
    }
}

impl Generator for Backend {
    fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        match self {
            Self::Ollama(ollama) => ollama.generate(prompt, temperature),
            Self::Offline(offline) => offline.generate(prompt, temperature),
        }
    }
}
