//! The NPC registry.
//!
//! An ordered, append-only collection built once at load time and read-only
//! afterwards. Lookup is case-insensitive and returns the first NPC declared
//! with a name, so later duplicates are unreachable.

use ndl_foundation::{Error, Npc};
use ndl_language::parser::Parser;
use tracing::debug;

/// Parsed NPCs in declaration order.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    npcs: Vec<Npc>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a script and registers every NPC it declares.
    ///
    /// Returns the registry together with the parse diagnostics.
    #[must_use]
    pub fn from_script(source: &str) -> (Self, Vec<Error>) {
        Self::from_parser(&Parser::new(source))
    }

    /// Like [`Registry::from_script`], with a source name attached to diagnostics.
    #[must_use]
    pub fn from_named_script(source: &str, name: &str) -> (Self, Vec<Error>) {
        Self::from_parser(&Parser::new(source).with_source_name(name))
    }

    fn from_parser(parser: &Parser<'_>) -> (Self, Vec<Error>) {
        let parsed = parser.parse();
        let mut registry = Self::new();
        for npc in parsed.npcs {
            registry.register(npc);
        }
        (registry, parsed.diagnostics)
    }

    /// Appends an NPC.
    pub fn register(&mut self, npc: Npc) {
        if self.find(&npc.name).is_some() {
            debug!(npc = %npc.name, "duplicate npc name; only the first is reachable");
        }
        self.npcs.push(npc);
    }

    /// Finds the first NPC with the given name, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Npc> {
        self.npcs.iter().find(|npc| npc.is_named(name))
    }

    /// Returns all names in declaration order, duplicates included.
    #[must_use]
    pub fn list(&self) -> Vec<&str> {
        self.npcs.iter().map(|npc| npc.name.as_str()).collect()
    }

    /// Returns the number of registered NPCs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.npcs.len()
    }

    /// Returns true if no NPCs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.npcs.is_empty()
    }

    /// Iterates over NPCs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Npc> {
        self.npcs.iter()
    }
}

impl FromIterator<Npc> for Registry {
    fn from_iter<I: IntoIterator<Item = Npc>>(iter: I) -> Self {
        let mut registry = Self::new();
        for npc in iter {
            registry.register(npc);
        }
        registry
    }
}
