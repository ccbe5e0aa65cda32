//! Field extraction for a single `npc` block.
//!
//! Each function takes the block's tokens, from the `npc` keyword through the
//! closing brace.

use crate::balance::{balanced_span, find_keyword};
use crate::token::{Keyword, Token, TokenKind};

/// Returns the first quoted string after the `npc` keyword.
///
/// `None` means the block has no usable name and must be discarded. An empty
/// first string counts as no name; later strings are not considered.
#[must_use]
pub fn extract_name(block: &[Token]) -> Option<String> {
    let npc = find_keyword(block, 0, Keyword::Npc)?;
    block[npc + 1..]
        .iter()
        .find_map(Token::as_string)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Returns the bracketed list after the `traits` keyword.
///
/// Elements are split on commas and trimmed. A quoted element contributes its
/// unquoted text; empty elements are dropped. No `traits` keyword or no
/// bracket pair yields an empty list.
#[must_use]
pub fn extract_traits(block: &[Token], source: &str) -> Vec<String> {
    let Some(keyword) = find_keyword(block, 0, Keyword::Traits) else {
        return Vec::new();
    };
    let Some(open) = block[keyword..]
        .iter()
        .position(|t| t.kind == TokenKind::LBracket)
        .map(|i| keyword + i)
    else {
        return Vec::new();
    };
    let Some(close) = block[open..]
        .iter()
        .position(|t| t.kind == TokenKind::RBracket)
        .map(|i| open + i)
    else {
        return Vec::new();
    };

    block[open + 1..close]
        .split(|t| t.kind == TokenKind::Comma)
        .filter_map(|element| trait_text(element, source))
        .collect()
}

fn trait_text(element: &[Token], source: &str) -> Option<String> {
    let text = match element {
        [] => return None,
        [single] => match &single.kind {
            TokenKind::String(s) => s.trim(),
            _ => single.text(source).trim(),
        },
        [first, .., last] => first.span.to(last.span).text(source).trim(),
    };
    (!text.is_empty()).then(|| text.to_string())
}

/// Returns the first quoted string after the `memory` keyword, if both exist.
#[must_use]
pub fn extract_memory(block: &[Token]) -> Option<String> {
    let keyword = find_keyword(block, 0, Keyword::Memory)?;
    block[keyword + 1..]
        .iter()
        .find_map(Token::as_string)
        .map(str::to_string)
}

/// Returns the tokens inside the balanced `{ ... }` following `dialogue`.
#[must_use]
pub fn extract_dialogue_block(block: &[Token]) -> Option<&[Token]> {
    let keyword = find_keyword(block, 0, Keyword::Dialogue)?;
    let span = balanced_span(block, keyword)?;
    Some(span.interior(block))
}
