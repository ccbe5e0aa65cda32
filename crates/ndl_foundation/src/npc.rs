//! NPC records produced by the parser.
//!
//! These are fixed-shape, owned records. Order inside every list is source
//! declaration order, which is also match priority.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-player character parsed from a script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Npc {
    /// Display name. Never empty; compared case-insensitively.
    pub name: String,
    /// Personality traits, in declaration order.
    pub traits: Vec<String>,
    /// Background memory used by the fallback prompt.
    pub memory: Option<String>,
    /// Rules answering direct player utterances.
    pub triggers: Vec<TriggerRule>,
    /// Rules relaying an utterance to another NPC.
    pub interactions: Vec<InteractionRule>,
    /// Generative fallback when nothing else matches.
    pub fallback: Option<FallbackRule>,
}

impl Npc {
    /// Creates an NPC with the given name and no traits, memory, or rules.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder method to set traits.
    #[must_use]
    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits = traits.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set memory.
    #[must_use]
    pub fn with_memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = Some(memory.into());
        self
    }

    /// Builder method to append a trigger rule.
    #[must_use]
    pub fn with_trigger(mut self, trigger: TriggerRule) -> Self {
        self.triggers.push(trigger);
        self
    }

    /// Builder method to append an interaction rule.
    #[must_use]
    pub fn with_interaction(mut self, interaction: InteractionRule) -> Self {
        self.interactions.push(interaction);
        self
    }

    /// Builder method to set the fallback rule.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackRule) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Returns true if `name` refers to this NPC (case-insensitive).
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Returns the trigger events, in declaration order.
    pub fn trigger_events(&self) -> impl Iterator<Item = &str> {
        self.triggers.iter().map(|t| t.event.as_str())
    }
}

/// `on "event" "line" -> action`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriggerRule {
    /// Keyword matched as a case-insensitive substring of the utterance.
    pub event: String,
    /// Response text.
    pub line: String,
    /// Action identifier; may be empty.
    pub action: String,
}

impl TriggerRule {
    /// Creates a new trigger rule.
    #[must_use]
    pub fn new(event: impl Into<String>, line: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            line: line.into(),
            action: action.into(),
        }
    }

    /// Returns true if this rule's event occurs in `utterance`.
    #[must_use]
    pub fn matches(&self, utterance: &str) -> bool {
        contains_ignore_case(utterance, &self.event)
    }
}

/// `with "target" on "event" "line" -> action`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InteractionRule {
    /// Name of the NPC the line is relayed to.
    pub target: String,
    /// Keyword matched as a case-insensitive substring of the utterance.
    pub event: String,
    /// Line spoken to the target; also the relayed utterance.
    pub line: String,
    /// Action identifier; may be empty.
    pub action: String,
}

impl InteractionRule {
    /// Creates a new interaction rule.
    #[must_use]
    pub fn new(
        target: impl Into<String>,
        event: impl Into<String>,
        line: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            event: event.into(),
            line: line.into(),
            action: action.into(),
        }
    }

    /// Returns true if this rule's event occurs in `utterance`.
    #[must_use]
    pub fn matches(&self, utterance: &str) -> bool {
        contains_ignore_case(utterance, &self.event)
    }
}

/// `fallback { ai "prompt" }`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FallbackRule {
    /// Prompt fragment appended to the generated context.
    pub prompt: String,
}

impl FallbackRule {
    /// Creates a new fallback rule.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Case-insensitive substring test. An empty needle matches everything.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
