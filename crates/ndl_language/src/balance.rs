//! Brace balancing and top-level block scanning.
//!
//! [`balanced_span`] is the one primitive used both to cut top-level `npc`
//! blocks out of a script and to find nested sub-blocks such as `dialogue`.
//! Quoted text is a single token, so braces inside quotes never move the
//! depth counter.

use ndl_foundation::Error;
use tracing::trace;

use crate::span::Span;
use crate::token::{Keyword, Token, TokenKind};

/// Token indices of a matched `{ ... }` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BraceSpan {
    /// Index of the opening `{`.
    pub open: usize,
    /// Index of the matching `}`.
    pub close: usize,
}

impl BraceSpan {
    /// Returns the tokens strictly between the braces.
    #[must_use]
    pub fn interior<'t>(&self, tokens: &'t [Token]) -> &'t [Token] {
        &tokens[self.open + 1..self.close]
    }
}

/// Walks forward from `from`, returning the first brace pair that brings the
/// depth back to zero.
///
/// Tokens before the first `{` are skipped, including stray `}`. Returns
/// `None` if the slice ends (or the lexer reported an error) before the depth
/// returns to zero, or if no `{` is found at all.
#[must_use]
pub fn balanced_span(tokens: &[Token], from: usize) -> Option<BraceSpan> {
    let mut depth = 0usize;
    let mut open = None;

    for (i, token) in tokens.iter().enumerate().skip(from) {
        match token.kind {
            TokenKind::LBrace => {
                if depth == 0 {
                    open = Some(i);
                }
                depth += 1;
            }
            TokenKind::RBrace if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return open.map(|open| BraceSpan { open, close: i });
                }
            }
            TokenKind::Eof | TokenKind::Error(_) => return None,
            _ => {}
        }
    }

    None
}

/// One top-level `npc` block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    /// Index of the `npc` keyword.
    pub start: usize,
    /// The block's outer braces.
    pub body: BraceSpan,
    /// Source span from `npc` through the closing brace.
    pub span: Span,
}

impl Block {
    /// Returns the block's tokens, from `npc` through the closing brace.
    #[must_use]
    pub fn tokens<'t>(&self, tokens: &'t [Token]) -> &'t [Token] {
        &tokens[self.start..=self.body.close]
    }

    /// Returns the raw block text.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// The outcome of scanning a script for blocks.
#[derive(Clone, Debug, Default)]
pub struct Scan {
    /// Complete blocks, in source order.
    pub blocks: Vec<Block>,
    /// Set when a block never closed; nothing after it was scanned.
    pub unbalanced: Option<Error>,
}

/// Extracts every balanced top-level `npc` block.
///
/// Scanning only moves forward. The first block that does not balance stops
/// the scan and is reported through [`Scan::unbalanced`]; blocks before it
/// are kept.
#[must_use]
pub fn scan(tokens: &[Token]) -> Scan {
    let mut result = Scan::default();
    let mut cursor = 0;

    while let Some(start) = find_keyword(tokens, cursor, Keyword::Npc) {
        let npc = tokens[start].span;
        let Some(body) = balanced_span(tokens, start) else {
            trace!(line = npc.line, column = npc.column, "npc block never closes");
            result.unbalanced = Some(Error::unbalanced_braces(npc.line, npc.column));
            break;
        };

        let block = Block {
            start,
            body,
            span: npc.to(tokens[body.close].span),
        };
        trace!(line = npc.line, tokens = body.close + 1 - start, "scanned npc block");
        result.blocks.push(block);
        cursor = body.close + 1;
    }

    result
}

/// Returns the index of the first `keyword` at or after `from`.
#[must_use]
pub fn find_keyword(tokens: &[Token], from: usize, keyword: Keyword) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, t)| t.is_keyword(keyword))
        .map(|(i, _)| i)
}
