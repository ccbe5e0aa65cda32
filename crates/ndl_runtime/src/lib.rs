//! Console, configuration, and generative backend for NDL.
//!
//! This crate provides:
//! - The interactive console (`Repl`)
//! - Line editing behind the `LineEditor` trait
//! - Layered configuration (`NdlConfig`)
//! - The Ollama-backed `Generator`
//! - Script loading and JSON dumps

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod ollama;
pub mod repl;
pub mod script;

pub use config::{GeneratorConfig, NdlConfig};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use ollama::{Backend, OfflineGenerator, OllamaGenerator};
pub use repl::{Mode, Repl};
pub use script::{LoadedScript, dump_json, load_script};
