//! A forward-only position over a token slice.
//!
//! Every `expect_*` step returns an explicit `Result`, so a missing token is
//! reported by name instead of producing a bogus offset.

use crate::token::{Keyword, Token, TokenKind};

/// Forward-only cursor over tokens.
#[derive(Clone, Debug)]
pub struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    /// Creates a cursor positioned at `pos`.
    #[must_use]
    pub const fn at(tokens: &'t [Token], pos: usize) -> Self {
        Self { tokens, pos }
    }

    /// Returns the current position.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the current token, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Consumes a quoted string and returns its text.
    ///
    /// # Errors
    /// Returns a description of what was found instead.
    pub fn expect_string(&mut self, what: &str) -> Result<String, String> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::String(s)) => {
                let s = s.clone();
                self.pos += 1;
                Ok(s)
            }
            other => Err(self.mismatch(&format!("quoted {what}"), other)),
        }
    }

    /// Consumes the given keyword.
    ///
    /// # Errors
    /// Returns a description of what was found instead.
    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), String> {
        match self.peek() {
            Some(t) if t.is_keyword(keyword) => {
                self.pos += 1;
                Ok(())
            }
            other => Err(self.mismatch(&format!("'{keyword}'"), other.map(|t| &t.kind))),
        }
    }

    /// Consumes `->`.
    ///
    /// # Errors
    /// Returns a description of what was found instead.
    pub fn expect_arrow(&mut self) -> Result<(), String> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Arrow) => {
                self.pos += 1;
                Ok(())
            }
            other => Err(self.mismatch("'->'", other)),
        }
    }

    /// Consumes an optional `:`.
    pub fn skip_colon(&mut self) {
        if matches!(self.peek().map(|t| &t.kind), Some(TokenKind::Colon)) {
            self.pos += 1;
        }
    }

    /// Consumes an action identifier if one follows; otherwise the action is empty.
    pub fn action(&mut self) -> String {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Ident(name)) => {
                self.pos += 1;
                name.clone()
            }
            _ => String::new(),
        }
    }

    fn mismatch(&self, expected: &str, found: Option<&TokenKind>) -> String {
        match found {
            Some(kind) => format!("expected {expected}, found {}", kind.name()),
            None => format!("expected {expected}, found end of dialogue"),
        }
    }
}
