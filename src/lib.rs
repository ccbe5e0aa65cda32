//! NDL - NPC Definition Language interpreter
//!
//! This crate re-exports all layers of the NDL system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: ndl_runtime    — Console, CLI, configuration, Ollama backend
//! Layer 2: ndl_engine     — Registry, resolution, relays, fallback prompts
//! Layer 1: ndl_language   — Lexer, block scanner, dialogue parser
//! Layer 0: ndl_foundation — NPC records, Error
//! ```

pub use ndl_engine as engine;
pub use ndl_foundation as foundation;
pub use ndl_language as language;
pub use ndl_runtime as runtime;
