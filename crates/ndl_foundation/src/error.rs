//! Error types for the NDL system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Parse problems are reported as errors too: the parser collects them as
//! diagnostics instead of returning early, so most of them never travel
//! through `?`.

use std::fmt;

use thiserror::Error;

/// The main error type for NDL operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unbalanced braces error for a block starting at the given position.
    #[must_use]
    pub fn unbalanced_braces(line: u32, column: u32) -> Self {
        Self::new(ErrorKind::UnbalancedBraces { line, column })
    }

    /// Creates a missing name error for a block starting at the given position.
    #[must_use]
    pub fn missing_name(line: u32, column: u32) -> Self {
        Self::new(ErrorKind::MissingName { line, column })
    }

    /// Creates a malformed rule error.
    #[must_use]
    pub fn malformed_rule(rule: RuleKind, message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::MalformedRule {
            rule,
            message: message.into(),
            line,
            column,
        })
    }

    /// Creates a generator failure error.
    #[must_use]
    pub fn generator(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneratorFailure(message.into()))
    }

    /// Creates a relay depth exceeded error.
    #[must_use]
    pub fn relay_depth_exceeded(limit: u32) -> Self {
        Self::new(ErrorKind::RelayDepthExceeded { limit })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: message.to_string(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error stops parsing of the rest of the script.
    #[must_use]
    pub const fn is_fatal_parse_error(&self) -> bool {
        matches!(self.kind, ErrorKind::UnbalancedBraces { .. })
    }

    /// Returns the source position this error points at, if any.
    #[must_use]
    pub const fn position(&self) -> Option<(u32, u32)> {
        match self.kind {
            ErrorKind::UnbalancedBraces { line, column }
            | ErrorKind::MissingName { line, column }
            | ErrorKind::MalformedRule { line, column, .. } => Some((line, column)),
            _ => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// An NPC block never returned to brace depth zero.
    #[error("unbalanced braces in npc block starting at {line}:{column}")]
    UnbalancedBraces {
        /// Line of the `npc` keyword (1-indexed).
        line: u32,
        /// Column of the `npc` keyword (1-indexed).
        column: u32,
    },

    /// An NPC block has no (or an empty) quoted name.
    #[error("could not find npc name in block starting at {line}:{column}")]
    MissingName {
        /// Line of the `npc` keyword (1-indexed).
        line: u32,
        /// Column of the `npc` keyword (1-indexed).
        column: u32,
    },

    /// A dialogue rule is missing a required token.
    #[error("malformed {rule} rule at {line}:{column}: {message}")]
    MalformedRule {
        /// Which kind of rule was being parsed.
        rule: RuleKind,
        /// What was missing.
        message: String,
        /// Line of the keyword that introduced the rule (1-indexed).
        line: u32,
        /// Column of the keyword that introduced the rule (1-indexed).
        column: u32,
    },

    /// The generative-text backend failed.
    #[error("generator failure: {0}")]
    GeneratorFailure(String),

    /// NPC-to-NPC relay went deeper than allowed.
    #[error("relay depth ({limit}) exceeded")]
    RelayDepthExceeded {
        /// The configured limit.
        limit: u32,
    },

    /// A file could not be read.
    #[error("cannot read {path}: {message}")]
    Io {
        /// The path that was accessed.
        path: String,
        /// Description of the failure.
        message: String,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// The kind of dialogue rule a [`ErrorKind::MalformedRule`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `on "event" "line" -> action`
    Trigger,
    /// `with "target" on "event" "line" -> action`
    Interaction,
    /// `fallback { ai "prompt" }`
    Fallback,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trigger => write!(f, "trigger"),
            Self::Interaction => write!(f, "interaction"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// The source line where the error occurred.
    pub excerpt: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the source excerpt.
    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(excerpt) = &self.excerpt {
            if self.source.is_some() {
                writeln!(f)?;
            }
            write!(f, "  | {excerpt}")?;
        }
        Ok(())
    }
}

/// Result type alias for NDL operations.
pub type Result<T> = std::result::Result<T, Error>;
