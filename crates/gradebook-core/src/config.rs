//! Gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Directory that relative data file names are resolved against.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Text shown after the data directory in the interactive shell.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Cap applied to filter/order queries that give no count (None = all).
    #[serde(default)]
    pub default_take: Option<usize>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            prompt: default_prompt(),
            default_take: None,
        }
    }
}

impl GradebookConfig {
    /// Resolve a data file name against `data_dir`. Absolute paths pass through.
    pub fn resolve(&self, file: impl AsRef<Path>) -> PathBuf {
        let file = file.as_ref();
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// Environment variable override: `GRADEBOOK_DATA_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => parse_config_file(&path)?,
        None => GradebookConfig::default(),
    };

    if let Ok(dir) = std::env::var("GRADEBOOK_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<GradebookConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
