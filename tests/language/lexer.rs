//! Integration tests for the lexer
//!
//! Tests tokenization of NDL source text.

use ndl_language::{Keyword, Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_empty() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("   \n\t "), vec![TokenKind::Eof]);
}

#[test]
fn tokenize_punctuation() {
    assert_eq!(
        kinds("{ } [ ] , : ; ->"),
        vec![
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Arrow,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn tokenize_lone_dash() {
    assert_eq!(
        kinds("- >"),
        vec![TokenKind::Punct('-'), TokenKind::Punct('>'), TokenKind::Eof]
    );
}

#[test]
fn tokenize_keywords() {
    let tokens = kinds("npc traits memory dialogue on with fallback ai");
    let keywords: Vec<_> = Keyword::ALL.iter().copied().map(TokenKind::Keyword).collect();
    assert_eq!(&tokens[..8], keywords.as_slice());
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(kinds("NPC")[0], TokenKind::Ident("NPC".to_string()));
    assert_eq!(kinds("On")[0], TokenKind::Ident("On".to_string()));
}

#[test]
fn keywords_are_whole_words() {
    assert_eq!(kinds("npcs")[0], TokenKind::Ident("npcs".to_string()));
    assert_eq!(kinds("onward")[0], TokenKind::Ident("onward".to_string()));
    assert_eq!(kinds("within")[0], TokenKind::Ident("within".to_string()));
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn tokenize_double_and_single_quotes() {
    assert_eq!(
        kinds(r#""Old Tom" 'Mira'"#),
        vec![
            TokenKind::String("Old Tom".to_string()),
            TokenKind::String("Mira".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn other_quote_is_literal_inside_string() {
    assert_eq!(
        kinds(r#""don't" 'say "hi"'"#)[..2],
        [
            TokenKind::String("don't".to_string()),
            TokenKind::String("say \"hi\"".to_string()),
        ]
    );
}

#[test]
fn braces_and_keywords_inside_strings_are_text() {
    assert_eq!(
        kinds(r#""{ npc on } memory""#),
        vec![
            TokenKind::String("{ npc on } memory".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn unterminated_string_is_an_error_token() {
    let tokens = kinds(r#"npc "Bob { }"#);
    assert_eq!(tokens[0], TokenKind::Keyword(Keyword::Npc));
    assert!(matches!(tokens[1], TokenKind::Error(_)));
    assert_eq!(tokens.last(), Some(&TokenKind::Eof));
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn spans_track_lines_and_columns() {
    let tokens = Lexer::tokenize_all("npc \"A\" {\n  dialogue {\n  }\n}");
    let dialogue = &tokens[3];
    assert_eq!(dialogue.kind, TokenKind::Keyword(Keyword::Dialogue));
    assert_eq!((dialogue.span.line, dialogue.span.column), (2, 3));
}

#[test]
fn span_text_round_trips_source() {
    let source = r#"on "hi" -> wave"#;
    let tokens = Lexer::tokenize_all(source);
    assert_eq!(tokens[1].text(source), "\"hi\"");
    assert_eq!(tokens[2].text(source), "->");
    assert_eq!(tokens[3].text(source), "wave");
}
