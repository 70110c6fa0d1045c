//! Repository type definitions
//!
//! Structs representing GitHub repository metadata as exported by the
//! `repo-export` tool.

use serde::{Deserialize, Serialize};

/// One repository record from the exported data set.
///
/// `name` is unique within an export and is the key used by every lookup
/// table. Only `name` and `html_url` are guaranteed to be present; everything
/// else is optional in the GitHub API response and treated as such here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
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

    /// Repository topics, in the order GitHub returns them
    #[serde(default)]
    pub topics: Vec<String>,

    /// Repository visibility
    #[serde(default)]
    pub visibility: Option<Visibility>,

    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601)
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Detected languages, most prominent first. Merged in from
    /// `languages.json` at load time; not part of `repos.json` itself.
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Repository visibility as reported by GitHub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Internal,
}

impl Repository {
    /// Whether the repository is private (drives the card badge)
    pub fn is_private(&self) -> bool {
        self.visibility == Some(Visibility::Private)
    }
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Internal => "internal",
        }
    }
}
