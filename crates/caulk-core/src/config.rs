//! Configuration file loading for caulk.
//!
//! Reads `.caulk/caulk.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level caulk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaulkConfig {
    pub version: String,
    #[serde(default)]
    pub enforce: EnforceConfig,
    #[serde(default)]
    pub ignore_classes: Vec<String>,
}

/// Per-profile enforcement toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnforceConfig {
    #[serde(default = "default_true")]
    pub fungible: bool,
    #[serde(default = "default_true")]
    pub non_fungible: bool,
}

fn default_true() -> bool {
    true
}

impl Default for EnforceConfig {
    fn default() -> Self {
        Self {
            fungible: true,
            non_fungible: true,
        }
    }
}

impl Default for CaulkConfig {
    fn default() -> Self {
        Self {
            version: "0.2.0".to_string(),
            enforce: EnforceConfig::default(),
            ignore_classes: vec![],
        }
    }
}

impl CaulkConfig {
    /// Load configuration from `caulk.json` inside the given caulk directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(caulk_dir: &Path) -> Self {
        let config_path = caulk_dir.join("caulk.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "caulk: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
