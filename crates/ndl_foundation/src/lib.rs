//! Core types and errors for NDL.
//!
//! This crate provides:
//! - [`Npc`] - A parsed non-player character with its dialogue rules
//! - [`TriggerRule`], [`InteractionRule`], [`FallbackRule`] - Rule records
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod npc;

pub use error::{Error, ErrorContext, ErrorKind, Result, RuleKind};
pub use npc::{FallbackRule, InteractionRule, Npc, TriggerRule};
