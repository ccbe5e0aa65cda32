//! Fallback prompt composition.

use std::fmt;

use ndl_foundation::{FallbackRule, Npc};

/// Placeholder used when an NPC has no memory.
pub const NO_MEMORY: &str = "No specific memory";

/// Closing instruction appended to every fallback prompt.
pub const CLOSING_INSTRUCTION: &str = "Respond concisely in character.";

/// Who the NPC is answering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience<'a> {
    /// A direct player utterance.
    Player,
    /// An utterance relayed from another NPC's interaction.
    Npc(&'a str),
}

impl<'a> Audience<'a> {
    /// Picks the audience for a resolution call.
    #[must_use]
    pub fn for_call(relayed: bool, utterance: &'a str) -> Self {
        if relayed {
            Self::Npc(utterance)
        } else {
            Self::Player
        }
    }
}

impl fmt::Display for Audience<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "responding to a player"),
            Self::Npc(utterance) => write!(f, "responding to another NPC ({utterance})"),
        }
    }
}

/// Builds the text sent to the generator for an NPC's fallback rule.
#[must_use]
pub fn fallback_prompt(
    npc: &Npc,
    fallback: &FallbackRule,
    utterance: &str,
    audience: Audience<'_>,
) -> String {
    let memory = npc.memory.as_deref().unwrap_or(NO_MEMORY);
    [
        format!(
            "You are {}, a character with these traits: {}.",
            npc.name,
            npc.traits.join(", ")
        ),
        format!("Your memory context: {memory}."),
        format!("Current situation: {audience}."),
        format!("The message was: \"{utterance}\"."),
        fallback.prompt.clone(),
        CLOSING_INSTRUCTION.to_string(),
    ]
    .join("\n")
}
