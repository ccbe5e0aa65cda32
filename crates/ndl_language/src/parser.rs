//! Script parser.
//!
//! Ties the pipeline together: lex the whole script once, cut it into `npc`
//! blocks, extract each block's fields and dialogue rules, and collect every
//! problem as a diagnostic instead of stopping at the first one.

use ndl_foundation::{Error, ErrorContext, Npc};
use tracing::{debug, warn};

use crate::balance::{Block, scan};
use crate::block::{extract_dialogue_block, extract_memory, extract_name, extract_traits};
use crate::dialogue::parse_dialogue;
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::Token;

/// The result of parsing a script.
#[derive(Clone, Debug, Default)]
pub struct ScriptParse {
    /// Successfully parsed NPCs, in declaration order.
    pub npcs: Vec<Npc>,
    /// Problems found while parsing, in source order.
    ///
    /// An `UnbalancedBraces` diagnostic, if present, is always the last one.
    pub diagnostics: Vec<Error>,
}

impl ScriptParse {
    /// Returns the error that stopped parsing early, if any.
    #[must_use]
    pub fn fatal(&self) -> Option<&Error> {
        self.diagnostics.iter().find(|e| e.is_fatal_parse_error())
    }

    /// Returns true if nothing was discarded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parser for NDL scripts.
pub struct Parser<'src> {
    /// Source text.
    source: &'src str,
    /// Name shown in diagnostics (usually the file path).
    source_name: Option<String>,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            source,
            source_name: None,
        }
    }

    /// Sets the name attached to diagnostics.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Parses every NPC in the script.
    #[must_use]
    pub fn parse(&self) -> ScriptParse {
        let tokens = Lexer::tokenize_all(self.source);
        let scan = scan(&tokens);
        let mut result = ScriptParse::default();

        for block in &scan.blocks {
            match self.parse_block(block, &tokens, &mut result.diagnostics) {
                Some(npc) => {
                    debug!(
                        npc = %npc.name,
                        triggers = npc.triggers.len(),
                        interactions = npc.interactions.len(),
                        fallback = npc.fallback.is_some(),
                        "parsed npc"
                    );
                    result.npcs.push(npc);
                }
                None => {
                    let span = tokens[block.start].span;
                    result.diagnostics.push(self.located(
                        Error::missing_name(span.line, span.column),
                        span,
                    ));
                }
            }
        }

        if let Some(err) = scan.unbalanced {
            let span = position_span(&tokens, &err);
            result.diagnostics.push(self.located(err, span));
        }

        for diagnostic in &result.diagnostics {
            warn!("{diagnostic}");
        }

        result
    }

    /// Parses one block. Returns `None` if the block has no name.
    fn parse_block(
        &self,
        block: &Block,
        tokens: &[Token],
        diagnostics: &mut Vec<Error>,
    ) -> Option<Npc> {
        let block_tokens = block.tokens(tokens);
        let name = extract_name(block_tokens)?;

        let mut npc = Npc::new(name);
        npc.traits = extract_traits(block_tokens, self.source);
        npc.memory = extract_memory(block_tokens);

        if let Some(interior) = extract_dialogue_block(block_tokens) {
            let dialogue = parse_dialogue(interior);
            npc.triggers = dialogue.triggers;
            npc.interactions = dialogue.interactions;
            npc.fallback = dialogue.fallback;
            diagnostics.extend(dialogue.diagnostics.into_iter().map(|err| {
                let span = position_span(interior, &err);
                self.located(err, span)
            }));
        }

        Some(npc)
    }

    /// Attaches the source name and the offending line to a diagnostic.
    fn located(&self, err: Error, span: Span) -> Error {
        let mut context = ErrorContext::new().with_excerpt(span.line_text(self.source).trim());
        if let Some(name) = &self.source_name {
            context = context.with_source(name.clone());
        }
        err.with_context(context)
    }
}

/// Finds the span of the token an error's position points at.
fn position_span(tokens: &[Token], err: &Error) -> Span {
    err.position()
        .and_then(|(line, column)| {
            tokens
                .iter()
                .find(|t| t.span.line == line && t.span.column == column)
        })
        .map_or_else(Span::default, |t| t.span)
}

/// Parses a script.
///
/// Never fails outright: problems are returned as diagnostics next to the
/// NPCs that did parse.
#[must_use]
pub fn parse_script(source: &str) -> ScriptParse {
    Parser::new(source).parse()
}
