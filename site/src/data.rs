//! Exported data loading
//!
//! The site renders from two JSON files produced offline by `repo-export`:
//! `repos.json` (repository records) and `languages.json` (repository name
//! to detected-language list). Both are read once at startup; the merged
//! collection is never mutated afterwards.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::Repository;

/// Errors that can occur when loading the exported data set
#[derive(Error, Debug)]
pub enum DataError {
    /// A data file is missing entirely
    #[error("no repository data at {0} - run `repo-export` to generate it")]
    Missing(PathBuf),

    /// A data file exists but could not be read
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file exists but is not valid JSON of the expected shape
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for data loading
pub type DataResult<T> = Result<T, DataError>;

/// Path of the repository records file inside a data directory
pub fn repos_path(data_dir: &Path) -> PathBuf {
    data_dir.join("repos.json")
}

/// Path of the language map file inside a data directory
pub fn languages_path(data_dir: &Path) -> PathBuf {
    data_dir.join("languages.json")
}

/// Load the exported repositories and merge each one's language list in by
/// name. A repository with no entry in `languages.json` gets an empty list.
pub fn load_repositories(data_dir: &Path) -> DataResult<Vec<Repository>> {
    let mut repos: Vec<Repository> = read_json(&repos_path(data_dir))?;
    let mut languages: HashMap<String, Vec<String>> = read_json(&languages_path(data_dir))?;

    for repo in &mut repos {
        repo.languages = languages.remove(&repo.name).unwrap_or_default();
    }

    tracing::debug!("loaded {} repositories from {}", repos.len(), data_dir.display());
    Ok(repos)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> DataResult<T> {
    if !path.exists() {
        return Err(DataError::Missing(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
