//! Runtime configuration.
//!
//! Settings are layered with `figment`:
//!
//! 1. built-in defaults
//! 2. `ndl.toml` in the working directory, or the file named by
//!    `NDL_CONFIG_PATH` or `--config`
//! 3. `NDL_`-prefixed environment variables, nested with `__`
//!    (`NDL_GENERATOR__MODEL=mistral`)
//!
//! Command-line flags are applied on top by the binary.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use ndl_engine::ResolverConfig;
use ndl_foundation::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "ndl.toml";

/// Environment variable naming an alternate configuration file.
pub const CONFIG_PATH_VAR: &str = "NDL_CONFIG_PATH";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NdlConfig {
    /// Resolution settings.
    pub resolver: ResolverConfig,
    /// Generative backend settings.
    pub generator: GeneratorConfig,
}

/// Settings for the Ollama backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Model name passed to the server.
    pub model: String,
    /// Server base URL, without a trailing `/api`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// When false, fallback rules fail instead of calling the server.
    pub enabled: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "llama3".to_string(),
            base_url: "http://localhost:11434".to_string(),
            timeout_secs: 120,
            enabled: true,
        }
    }
}

impl NdlConfig {
    /// Loads configuration from defaults, the config file, and the environment.
    ///
    /// An explicit `path` replaces both `ndl.toml` and `NDL_CONFIG_PATH`.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if a source cannot be parsed or the result is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => Toml::file(path),
            None => match std::env::var(CONFIG_PATH_VAR) {
                Ok(path) => Toml::file(path),
                Err(_) => Toml::file(CONFIG_FILE),
            },
        };

        Self::extract(
            Figment::from(Serialized::defaults(Self::default()))
                .merge(file)
                .merge(Env::prefixed("NDL_").ignore(&["CONFIG_PATH"]).split("__")),
        )
    }

    /// Loads configuration from a single TOML file over the defaults.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the file cannot be parsed or the result is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::extract(
            Figment::from(Serialized::defaults(Self::default())).merge(Toml::file(path.as_ref())),
        )
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|e| Error::config(format!("failed to load configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error for a negative or non-finite temperature or an
    /// empty model name.
    pub fn validate(&self) -> Result<()> {
        let temperature = self.resolver.temperature;
        if !temperature.is_finite() || temperature < 0.0 {
            return Err(Error::config(format!(
                "temperature must be a non-negative number, got {temperature}"
            )));
        }
        if self.generator.model.trim().is_empty() {
            return Err(Error::config("generator model must not be empty"));
        }
        Ok(())
    }

    /// Builder method to set the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.generator.model = model.into();
        self
    }

    /// Builder method to set the relay bound.
    #[must_use]
    pub fn with_max_relay_depth(mut self, depth: u32) -> Self {
        self.resolver = self.resolver.with_max_relay_depth(depth);
        self
    }

    /// Builder method to disable the generator.
    #[must_use]
    pub fn offline(mut self) -> Self {
        self.generator.enabled = false;
        self
    }
}
