//! Token types for NDL scripts.
//!
//! Tokens are the output of the lexer and input to the scanner and parsers.

use std::fmt;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true if this token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// Returns true if this token ends a statement inside a dialogue block.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self.kind, TokenKind::Semicolon | TokenKind::RBrace)
    }

    /// Returns the string literal value, if this is a string token.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::String(s) => Some(s),
            _ => None,
        }
    }
}

/// The reserved words of NDL. Matching is case-sensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `npc`
    Npc,
    /// `traits`
    Traits,
    /// `memory`
    Memory,
    /// `dialogue`
    Dialogue,
    /// `on`
    On,
    /// `with`
    With,
    /// `fallback`
    Fallback,
    /// `ai`
    Ai,
}

impl Keyword {
    /// All keywords, in grammar order.
    pub const ALL: [Self; 8] = [
        Self::Npc,
        Self::Traits,
        Self::Memory,
        Self::Dialogue,
        Self::On,
        Self::With,
        Self::Fallback,
        Self::Ai,
    ];

    /// Looks up a keyword by its exact spelling.
    #[must_use]
    pub fn from_ident(ident: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == ident)
    }

    /// Returns the source spelling of this keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Npc => "npc",
            Self::Traits => "traits",
            Self::Memory => "memory",
            Self::Dialogue => "dialogue",
            Self::On => "on",
            Self::With => "with",
            Self::Fallback => "fallback",
            Self::Ai => "ai",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token types for NDL.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Delimiters
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    // Punctuation
    /// `->`
    Arrow,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// Any other non-whitespace character.
    Punct(char),

    // Words
    /// Quoted text, `"..."` or `'...'`, without its quotes.
    String(String),
    /// A reserved word.
    Keyword(Keyword),
    /// A maximal run of alphanumeric characters that is not a keyword.
    Ident(String),

    // Meta
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Arrow => "'->'",
            Self::Comma => "','",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::Punct(_) => "punctuation",
            Self::String(_) => "quoted string",
            Self::Keyword(k) => k.as_str(),
            Self::Ident(_) => "identifier",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
