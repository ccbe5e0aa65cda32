//! Cross-layer integration tests for NDL
//!
//! Tests that verify correct interaction between multiple crates.

mod console;
