//! Configuration file loading for careen.
//!
//! Reads `.careen/careen.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or
//! incomplete. Template text is deliberately not part of this file — the
//! template loader is a separate collaborator with strict error semantics.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level careen configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareenConfig {
    pub version: String,
    #[serde(default)]
    pub repair: RepairSettings,
}

/// Repair loop tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairSettings {
    /// Upper bound on repair rounds. One round = one oracle call.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_max_iterations() -> u32 {
    1
}

impl Default for RepairSettings {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
        }
    }
}

impl Default for CareenConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            repair: RepairSettings::default(),
        }
    }
}

impl CareenConfig {
    /// Load configuration from `careen.json` inside the given careen directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(careen_dir: &Path) -> Self {
        let config_path = careen_dir.join("careen.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "careen: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
