use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

use super::difficulty::DifficultyTable;
use super::variant::Variant;

/// Settings handed to the page's sync component. The token and gist id are
/// never written here; the browser keeps them in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub api_base: String,
    pub file_name: String,
    pub description: String,
    pub storage_prefix: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            file_name: "leetcode-progress.json".to_string(),
            description: "LeetCode 100-Day Tracker Progress".to_string(),
            storage_prefix: "leetcode-tracker".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub variant: Variant,
    pub output_dir: Option<PathBuf>,
    pub title: Option<String>,
    pub sync: SyncConfig,
    /// Replaces the variant's built-in difficulty table when set.
    pub difficulty: Option<DifficultyTable>,
}

pub fn get_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(TrackerError::NoConfigDir)?;
    Ok(home.join(".config").join("plantrack").join("config.json"))
}

pub fn load_config(path: &Path) -> UserConfig {
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
            UserConfig::default()
        }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read config");
            UserConfig::default()
        }
    }
}

pub fn save_config(path: &Path, config: &UserConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| TrackerError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents).map_err(|source| TrackerError::Write {
        path: path.to_path_buf(),
        source,
    })
}
