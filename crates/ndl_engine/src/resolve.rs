//! Utterance resolution.
//!
//! Resolution walks one NPC's rules in a fixed precedence:
//!
//! 1. triggers (skipped for relayed utterances)
//! 2. interactions, which relay their line to another NPC
//! 3. the generative fallback
//!
//! The first rule that matches answers. Relays recurse through the same
//! procedure with a depth counter capped by [`ResolverConfig::max_relay_depth`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use ndl_foundation::{Error, InteractionRule, Npc, Result};
use tracing::{debug, trace};

use crate::config::ResolverConfig;
use crate::generator::Generator;
use crate::prompt::{Audience, fallback_prompt};
use crate::registry::Registry;

/// Action reported for generated responses.
pub const AI_ACTION: &str = "ai_response";

/// Embedded in a relay annotation when the target had nothing to say.
pub const NO_RESPONSE: &str = "(no response)";

/// Which kind of rule produced a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResponseSource {
    /// A trigger rule.
    Trigger,
    /// An interaction rule, including its relayed annotation.
    Interaction,
    /// The generative fallback.
    Fallback,
    /// The NPC name did not resolve.
    UnknownNpc,
}

/// A resolved response.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Response {
    /// Text to show.
    pub text: String,
    /// Action identifier, if the rule declared one.
    pub action: Option<String>,
    /// Rule kind that answered.
    pub source: ResponseSource,
}

impl Response {
    /// Creates a response. An empty action is stored as `None`.
    #[must_use]
    pub fn new(text: impl Into<String>, action: &str, source: ResponseSource) -> Self {
        Self {
            text: text.into(),
            action: (!action.is_empty()).then(|| action.to_string()),
            source,
        }
    }

    /// The response given for a name that is not registered.
    #[must_use]
    pub fn not_found(name: &str) -> Self {
        Self::new(format!("NPC {name} not found."), "", ResponseSource::UnknownNpc)
    }

    /// Returns the action identifier, or `""` when there is none.
    #[must_use]
    pub fn action_str(&self) -> &str {
        self.action.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Some(action) => write!(f, "{} -> {action}", self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

/// Resolves utterances against a registry of NPCs.
pub struct Resolver<G> {
    registry: Registry,
    generator: G,
    config: ResolverConfig,
}

impl<G: Generator> Resolver<G> {
    /// Creates a resolver with the default configuration.
    #[must_use]
    pub fn new(registry: Registry, generator: G) -> Self {
        Self {
            registry,
            generator,
            config: ResolverConfig::default(),
        }
    }

    /// Builder method to replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns all NPC names in declaration order.
    #[must_use]
    pub fn list_npcs(&self) -> Vec<&str> {
        self.registry.list()
    }

    /// Finds an NPC by name, ignoring case.
    #[must_use]
    pub fn find_npc(&self, name: &str) -> Option<&Npc> {
        self.registry.find(name)
    }

    /// Resolves `utterance` addressed to the NPC called `name`.
    ///
    /// `relayed` marks an utterance coming from another NPC; triggers are not
    /// consulted for those. Returns `Ok(None)` when no rule applies.
    ///
    /// # Errors
    ///
    /// Returns a `GeneratorFailure` error if a fallback rule is reached,
    /// directly or through a relay, and the generator fails.
    pub fn resolve(&self, name: &str, utterance: &str, relayed: bool) -> Result<Option<Response>> {
        self.resolve_at(name, utterance, relayed, 0)
    }

    fn resolve_at(
        &self,
        name: &str,
        utterance: &str,
        relayed: bool,
        depth: u32,
    ) -> Result<Option<Response>> {
        let Some(npc) = self.registry.find(name) else {
            debug!(npc = name, depth, "unknown npc");
            return Ok(Some(Response::not_found(name)));
        };
        trace!(npc = %npc.name, depth, relayed, utterance, "resolving");

        if !relayed {
            if let Some(rule) = npc.triggers.iter().find(|rule| rule.matches(utterance)) {
                debug!(npc = %npc.name, event = %rule.event, depth, "trigger matched");
                return Ok(Some(Response::new(
                    rule.line.clone(),
                    &rule.action,
                    ResponseSource::Trigger,
                )));
            }
        }

        if let Some(rule) = npc.interactions.iter().find(|rule| rule.matches(utterance)) {
            debug!(npc = %npc.name, event = %rule.event, to = %rule.target, depth, "interaction matched");
            return self.relay(rule, depth).map(Some);
        }

        if let Some(fallback) = &npc.fallback {
            let prompt = fallback_prompt(
                npc,
                fallback,
                utterance,
                Audience::for_call(relayed, utterance),
            );
            debug!(npc = %npc.name, depth, "falling back to generator");
            let text = self.generator.generate(&prompt, self.config.temperature)?;
            return Ok(Some(Response::new(text, AI_ACTION, ResponseSource::Fallback)));
        }

        debug!(npc = %npc.name, depth, "no rule matched");
        Ok(None)
    }

    fn relay(&self, rule: &InteractionRule, depth: u32) -> Result<Response> {
        let text = match self.registry.find(&rule.target) {
            Some(target) => {
                let reply = self.hop(target, &rule.line, depth + 1)?;
                format!("{} (to {}: {reply})", rule.line, target.name)
            }
            None => format!("{} (but {} isn't here)", rule.line, rule.target),
        };
        Ok(Response::new(text, &rule.action, ResponseSource::Interaction))
    }

    fn hop(&self, target: &Npc, utterance: &str, depth: u32) -> Result<String> {
        let limit = self.config.max_relay_depth;
        if depth > limit {
            let cut = Error::relay_depth_exceeded(limit);
            debug!(to = %target.name, depth, "{cut}");
            return Ok(format!(
                "{} is too caught up in conversation to respond.",
                target.name
            ));
        }

        debug!(to = %target.name, depth, "relaying");
        let reply = self.resolve_at(&target.name, utterance, true, depth)?;
        Ok(reply.map_or_else(|| NO_RESPONSE.to_string(), |response| response.text))
    }
}
