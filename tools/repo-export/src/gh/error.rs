//! Error types for gh CLI operations

use thiserror::Error;

/// Errors that can occur when calling the GitHub API through the gh CLI
#[derive(Error, Debug)]
pub enum GhError {
    /// The API call exited with a non-zero status
    #[error("gh api call failed (exit code {code}): {stderr}")]
    ApiFailed {
        /// Exit code from the gh process
        code: i32,
        /// Standard error output from gh
        stderr: String,
    },

    /// Failed to spawn the gh process
    #[error("failed to spawn gh process: {0}")]
    Spawn(#[from] std::io::Error),

    /// The API response was not the JSON shape we expected
    #[error("failed to parse gh api response: {0}")]
    Parse(#[from] serde_json::Error),

    /// gh CLI is not installed or not in PATH
    #[error("gh CLI not found - ensure gh is installed and in PATH")]
    NotFound,

    /// gh CLI is not authenticated
    #[error("gh CLI not authenticated - run 'gh auth login' first")]
    NotAuthenticated,
}

/// Result type alias for gh operations
pub type GhResult<T> = Result<T, GhError>;
