//! Exported record shapes
//!
//! Fields mirror the GitHub REST API response (snake_case): what the site
//! consumes, plus what the export itself needs (`archived` for filtering,
//! `owner` for the follow-up languages call).

use serde::{Deserialize, Serialize};

/// One repository as returned by `user/repos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedRepo {
    /// Repository name (without owner)
    pub name: String,

    /// Repository description
    #[serde(default)]
    pub description: Option<String>,

    /// Repository URL on GitHub
    pub html_url: String,

    /// Project homepage, if one is configured
    #[serde(default)]
    pub homepage: Option<String>,

    /// Repository topics
    #[serde(default)]
    pub topics: Vec<String>,

    /// Repository visibility (public/private/internal)
    #[serde(default)]
    pub visibility: Option<String>,

    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601)
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Whether the repository is archived
    #[serde(default)]
    pub archived: bool,

    /// Repository owner
    pub owner: Owner,
}

/// Repository owner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}
