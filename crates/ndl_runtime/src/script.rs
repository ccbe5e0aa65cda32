//! Loading script files.

use std::fs;
use std::path::Path;

use ndl_engine::Registry;
use ndl_foundation::{Error, Npc, Result};
use tracing::info;

/// A script file parsed into a registry.
#[derive(Debug)]
pub struct LoadedScript {
    /// Registered NPCs.
    pub registry: Registry,
    /// Parse diagnostics, in source order.
    pub diagnostics: Vec<Error>,
}

impl LoadedScript {
    /// Returns true if a diagnostic stopped parsing early.
    #[must_use]
    pub fn stopped_early(&self) -> bool {
        self.diagnostics.iter().any(Error::is_fatal_parse_error)
    }
}

/// Reads and parses a script file.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read. Parse problems are
/// returned as diagnostics, not errors.
pub fn load_script(path: &Path) -> Result<LoadedScript> {
    let source = fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), e))?;
    let (registry, diagnostics) = Registry::from_named_script(&source, &path.display().to_string());
    info!(
        path = %path.display(),
        npcs = registry.len(),
        diagnostics = diagnostics.len(),
        "loaded script"
    );
    Ok(LoadedScript {
        registry,
        diagnostics,
    })
}

/// Renders the registered NPCs as pretty-printed JSON.
///
/// # Errors
///
/// Returns an `Internal` error if serialization fails.
pub fn dump_json(registry: &Registry) -> Result<String> {
    let npcs: Vec<&Npc> = registry.iter().collect();
    serde_json::to_string_pretty(&npcs).map_err(|e| Error::internal(e.to_string()))
}
