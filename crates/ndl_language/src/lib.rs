//! Lexer, block scanner, and dialogue parser for NDL scripts.
//!
//! # Architecture
//!
//! ```text
//! script text
//!      │
//!      ▼
//! ┌─────────────┐
//! │   LEXER     │  → [Keyword(npc), String("Bob"), LBrace, ...]
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │   SCANNER   │  → balanced `npc { ... }` blocks (or UnbalancedBraces)
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │   BLOCK     │  → name, traits, memory, dialogue sub-block
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │  DIALOGUE   │  → triggers, interactions, fallback
//! └─────────────┘
//! ```
//!
//! [`parse_script`] runs the whole pipeline and returns the parsed NPCs
//! together with any diagnostics.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod balance;
pub mod block;
pub mod cursor;
pub mod dialogue;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;

pub use balance::{Block, BraceSpan, Scan, balanced_span, scan};
pub use dialogue::{Dialogue, parse_dialogue};
pub use lexer::Lexer;
pub use parser::{Parser, ScriptParse, parse_script};
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
