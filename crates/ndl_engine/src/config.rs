//! Resolver configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default bound on NPC-to-NPC relay hops.
pub const DEFAULT_MAX_RELAY_DEPTH: u32 = 1;

/// Default sampling temperature for fallback generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Tunables for [`crate::Resolver`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Maximum number of relay hops before a conversation is cut off.
    pub max_relay_depth: u32,
    /// Temperature passed to the generator.
    pub temperature: f32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_relay_depth: DEFAULT_MAX_RELAY_DEPTH,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl ResolverConfig {
    /// Builder method to set the relay bound.
    #[must_use]
    pub fn with_max_relay_depth(mut self, depth: u32) -> Self {
        self.max_relay_depth = depth;
        self
    }

    /// Builder method to set the generator temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}
