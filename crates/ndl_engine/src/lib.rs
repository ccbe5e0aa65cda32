//! NPC registry and utterance resolution.
//!
//! A [`Resolver`] owns a read-only [`Registry`] and a [`Generator`]. Each
//! call to [`Resolver::resolve`] runs to completion: triggers first, then
//! interactions (which may relay to other NPCs up to a bounded depth), then
//! the generative fallback.
//!
//! ```
//! use ndl_engine::{Registry, Resolver};
//! use ndl_foundation::{Error, Result};
//!
//! let (registry, diagnostics) = Registry::from_script(
//!     r#"npc "Elara" { dialogue { on "hello" "Welcome!" -> wave } }"#,
//! );
//! assert!(diagnostics.is_empty());
//!
//! let offline = |_: &str, _: f32| -> Result<String> { Err(Error::generator("offline")) };
//! let resolver = Resolver::new(registry, offline);
//! let response = resolver.resolve("elara", "hello there", false).unwrap().unwrap();
//! assert_eq!(response.to_string(), "Welcome! -> wave");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod generator;
pub mod prompt;
pub mod registry;
pub mod resolve;

pub use config::ResolverConfig;
pub use generator::Generator;
pub use prompt::{Audience, fallback_prompt};
pub use registry::Registry;
pub use resolve::{Resolver, Response, ResponseSource};
