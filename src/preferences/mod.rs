//! Persistent user preferences
//!
//! The only state this tool writes: the last selected project filter and the
//! session sort order, kept in a small JSON document.
//!
//! Location: platform-specific config directories
//! - macOS: `~/Library/Application Support/claude-history/preferences.json`
//! - Linux: `~/.config/claude-history/preferences.json`
//! - Windows: `%APPDATA%\claude-history\preferences.json`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::SortOrder;

const APP_DIR: &str = "claude-history";
const PREFERENCES_FILENAME: &str = "preferences.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Project path of the last selected filter; `None` means all projects
    #[serde(default, rename = "lastProject")]
    pub last_project: Option<String>,
    #[serde(default, rename = "sortOrder")]
    pub sort_order: SortOrder,
}

impl Preferences {
    /// Default preferences file in the platform config directory
    pub fn default_path() -> Result<PathBuf> {
        let config_base = dirs::config_dir().context("Failed to get platform config directory")?;
        Ok(config_base.join(APP_DIR).join(PREFERENCES_FILENAME))
    }

    /// Load preferences; a missing or corrupt file yields the defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                tracing::debug!(path = ?path, error = %e, "no stored preferences");
                return Self::default();
            }
        };

        serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!(path = ?path, error = %e, "ignoring corrupt preferences file");
            Self::default()
        })
    }

    /// Save atomically (temp file + rename), creating the directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create preferences directory")?;
        }

        let temp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).context("Failed to serialize preferences")?;
        fs::write(&temp, json).context("Failed to write preferences temp file")?;
        fs::rename(&temp, path).context("Failed to rename preferences temp file")?;
        Ok(())
    }
}
