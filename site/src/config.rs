//! Configuration loading

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cards::TimestampField;

/// Find a config file by walking up the directory tree, then checking global
/// config.
///
/// Search order:
/// 1. Current directory and parent directories (walking up to root)
/// 2. Global config at ~/.config/folio/
///
/// Returns the path if found, None otherwise.
fn find_config_file(filename: &str) -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let candidate = current.join(filename);
        if candidate.exists() {
            return Some(candidate);
        }

        // Also check site/ subdirectory (for project root detection)
        let site_candidate = current.join("site").join(filename);
        if site_candidate.exists() {
            return Some(site_candidate);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let global_path = config_dir.join("folio").join(filename);
        if global_path.exists() {
            return Some(global_path);
        }
    }

    None
}

/// Top-level site configuration (from folio.toml)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub data: DataSection,
}

/// Site presentation section
#[derive(Debug, Deserialize)]
pub struct SiteSection {
    /// Page title
    #[serde(default = "default_title")]
    pub title: String,
    /// Owner name shown under the title
    #[serde(default)]
    pub owner: Option<String>,
    /// Which repository timestamp the cards display
    #[serde(default)]
    pub timestamp: TimestampField,
    /// Port the server binds to
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Data location section
#[derive(Debug, Deserialize)]
pub struct DataSection {
    /// Directory holding repos.json and languages.json
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

fn default_title() -> String {
    "Repositories".to_string()
}

fn default_port() -> u16 {
    4173
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("site/data")
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            owner: None,
            timestamp: TimestampField::default(),
            port: default_port(),
        }
    }
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

impl FileConfig {
    /// Load folio.toml, falling back to defaults when no file is found.
    ///
    /// Search order:
    /// 1. Walk up directory tree from cwd looking for folio.toml
    /// 2. Check ~/.config/folio/folio.toml (global fallback)
    pub fn load() -> Result<Self> {
        if let Some(config_path) = find_config_file("folio.toml") {
            tracing::debug!("loading config from: {}", config_path.display());
            return Self::load_from_path(&config_path);
        }

        tracing::debug!("no folio.toml found, using defaults");
        Ok(Self::default())
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
