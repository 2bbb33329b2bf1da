// File: src/config.rs
// Purpose: configuration parsing from portico.toml

use anyhow::{Context, Result};
use portico_routes::AccessMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub access: AccessConfig,
    pub menu: MenuConfig,
}

/// Access-mode selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// `frontend` filters a static tree by permission codes; `backend`
    /// trusts the server-supplied route list (default: `frontend`)
    #[serde(default = "default_mode")]
    pub mode: AccessMode,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
        }
    }
}

/// Menu behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Which `parents` level resolves the highlighted first-level tab
    /// (default: 0)
    #[serde(default)]
    pub root_level: usize,

    /// Whether hidden detail pages strip their dynamic tail so the parent
    /// listing stays highlighted (default: true)
    #[serde(default = "default_true")]
    pub strip_hidden_detail: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            root_level: 0,
            strip_hidden_detail: default_true(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Loads `portico.toml` from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load_default() -> Result<Self> {
        let path = Path::new("portico.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

fn default_mode() -> AccessMode {
    AccessMode::Frontend
}

fn default_true() -> bool {
    true
}
