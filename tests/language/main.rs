//! Integration tests for the language layer
//!
//! Tests for the lexer, block scanner, and dialogue parser.

mod lexer;
mod properties;
