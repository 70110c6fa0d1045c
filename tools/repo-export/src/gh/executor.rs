//! Async executor for gh CLI calls
//!
//! Thin wrapper around `gh api` with error handling and JSON parsing. The
//! gh CLI supplies authentication; no token handling happens here.

use serde::de::DeserializeOwned;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, instrument};

use super::error::{GhError, GhResult};

/// Run `gh api <endpoint>` and parse the JSON response
///
/// # Errors
///
/// Returns an error if:
/// - The gh process fails to spawn
/// - The call exits with non-zero status
/// - The JSON response cannot be parsed
#[instrument]
pub async fn gh_api_json<T: DeserializeOwned>(endpoint: &str) -> GhResult<T> {
    debug!("executing: gh api {}", endpoint);

    let output = Command::new("gh")
        .args(["api", endpoint])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GhError::NotFound
            } else {
                GhError::Spawn(e)
            }
        })?
        .wait_with_output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);

        // Check for common authentication errors
        if stderr.contains("gh auth login") || stderr.contains("not logged in") {
            error!("gh authentication required");
            return Err(GhError::NotAuthenticated);
        }

        error!(code, stderr = %stderr, "gh api call failed");
        return Err(GhError::ApiFailed { code, stderr });
    }

    let parsed: T = serde_json::from_slice(&output.stdout)?;
    Ok(parsed)
}

/// Check that the gh CLI is installed, in PATH, and authenticated. Run once
/// before an export so auth problems surface before any paging starts.
#[instrument]
pub async fn check_gh_available() -> GhResult<()> {
    debug!("checking gh availability");

    let output = Command::new("gh")
        .args(["auth", "status"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GhError::NotFound
            } else {
                GhError::Spawn(e)
            }
        })?
        .wait_with_output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if stderr.contains("not logged in") {
            return Err(GhError::NotAuthenticated);
        }
    }

    debug!("gh is available and authenticated");
    Ok(())
}
