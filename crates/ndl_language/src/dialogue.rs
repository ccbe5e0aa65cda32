//! Rule extraction for a `dialogue { ... }` sub-block.
//!
//! The trigger scan and the interaction scan each run over the whole
//! sub-block with their own forward-only cursor; the fallback scan runs last.
//! A malformed rule is recorded as a diagnostic and skipped: scanning resumes
//! just past the keyword that introduced it.

use ndl_foundation::{Error, FallbackRule, InteractionRule, RuleKind, TriggerRule};

use crate::balance::find_keyword;
use crate::cursor::Cursor;
use crate::token::{Keyword, Token};

/// Rules parsed from one dialogue sub-block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dialogue {
    /// Trigger rules in declaration order.
    pub triggers: Vec<TriggerRule>,
    /// Interaction rules in declaration order.
    pub interactions: Vec<InteractionRule>,
    /// The fallback rule, if a complete one was declared.
    pub fallback: Option<FallbackRule>,
    /// Rules that were discarded.
    pub diagnostics: Vec<Error>,
}

/// Parses the interior tokens of a dialogue sub-block.
#[must_use]
pub fn parse_dialogue(tokens: &[Token]) -> Dialogue {
    let mut dialogue = Dialogue::default();
    scan_triggers(tokens, &mut dialogue);
    scan_interactions(tokens, &mut dialogue);
    scan_fallback(tokens, &mut dialogue);
    dialogue
}

/// `on "event" [:] "line" -> action`
fn scan_triggers(tokens: &[Token], dialogue: &mut Dialogue) {
    let mut cursor = 0;
    while let Some(on) = find_keyword(tokens, cursor, Keyword::On) {
        if belongs_to_interaction(&tokens[cursor..on]) {
            cursor = on + 1;
            continue;
        }

        let mut rule = Cursor::at(tokens, on + 1);
        match trigger_tail(&mut rule) {
            Ok(trigger) => {
                dialogue.triggers.push(trigger);
                cursor = rule.pos();
            }
            Err(message) => {
                dialogue
                    .diagnostics
                    .push(malformed(RuleKind::Trigger, message, &tokens[on]));
                cursor = on + 1;
            }
        }
    }
}

fn trigger_tail(rule: &mut Cursor<'_>) -> Result<TriggerRule, String> {
    let event = rule.expect_string("event")?;
    rule.skip_colon();
    let line = rule.expect_string("line")?;
    rule.expect_arrow()?;
    Ok(TriggerRule::new(event, line, rule.action()))
}

/// An `on` is part of an interaction when the nearest `with` before it, in
/// the unconsumed region, is not followed by a statement separator.
fn belongs_to_interaction(before_on: &[Token]) -> bool {
    before_on
        .iter()
        .rposition(|t| t.is_keyword(Keyword::With))
        .is_some_and(|with| !before_on[with..].iter().any(Token::is_separator))
}

/// `with "target" on "event" [:] "line" -> action`
fn scan_interactions(tokens: &[Token], dialogue: &mut Dialogue) {
    let mut cursor = 0;
    while let Some(with) = find_keyword(tokens, cursor, Keyword::With) {
        let mut rule = Cursor::at(tokens, with + 1);
        match interaction_tail(&mut rule) {
            Ok(interaction) => {
                dialogue.interactions.push(interaction);
                cursor = rule.pos();
            }
            Err(message) => {
                dialogue
                    .diagnostics
                    .push(malformed(RuleKind::Interaction, message, &tokens[with]));
                cursor = with + 1;
            }
        }
    }
}

fn interaction_tail(rule: &mut Cursor<'_>) -> Result<InteractionRule, String> {
    let target = rule.expect_string("target")?;
    rule.expect_keyword(Keyword::On)?;
    let event = rule.expect_string("event")?;
    rule.skip_colon();
    let line = rule.expect_string("line")?;
    rule.expect_arrow()?;
    Ok(InteractionRule::new(target, event, line, rule.action()))
}

/// `fallback { ai "prompt" }`
fn scan_fallback(tokens: &[Token], dialogue: &mut Dialogue) {
    let Some(fallback) = find_keyword(tokens, 0, Keyword::Fallback) else {
        return;
    };
    let Some(ai) = find_keyword(tokens, fallback + 1, Keyword::Ai) else {
        dialogue.diagnostics.push(malformed(
            RuleKind::Fallback,
            "expected 'ai' after 'fallback'",
            &tokens[fallback],
        ));
        return;
    };
    match tokens[ai + 1..].iter().find_map(Token::as_string) {
        Some(prompt) => dialogue.fallback = Some(FallbackRule::new(prompt)),
        None => dialogue.diagnostics.push(malformed(
            RuleKind::Fallback,
            "expected quoted prompt after 'ai'",
            &tokens[fallback],
        )),
    }
}

fn malformed(rule: RuleKind, message: impl Into<String>, keyword: &Token) -> Error {
    Error::malformed_rule(rule, message, keyword.span.line, keyword.span.column)
}
