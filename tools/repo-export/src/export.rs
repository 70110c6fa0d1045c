//! One-shot export of repository metadata
//!
//! Fail-fast: any error aborts the whole export with a non-zero exit, and
//! the output files are only written after every fetch has succeeded, so a
//! failed run never leaves a partial data set behind.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use tracing::info;

use crate::gh::{check_gh_available, gh_api_json};
use crate::types::ExportedRepo;

const PER_PAGE: usize = 100;

pub struct ExportOptions {
    /// Directory the JSON files are written into
    pub out_dir: PathBuf,
}

/// Fetch everything, then write `repos.json` and `languages.json`
pub async fn run(options: &ExportOptions) -> Result<()> {
    check_gh_available().await?;

    let repos = retain_active(fetch_owned_repositories().await?);

    let mut languages = Map::new();
    for repo in &repos {
        info!("fetching languages for {}", repo.name);
        let breakdown: Map<String, Value> = gh_api_json(&format!(
            "repos/{}/{}/languages",
            repo.owner.login, repo.name
        ))
        .await?;
        languages.insert(repo.name.clone(), json!(language_names(&breakdown)));
    }

    write_export(&options.out_dir, &repos, &languages)?;
    info!(
        "exported {} repositories to {}",
        repos.len(),
        options.out_dir.display()
    );
    Ok(())
}

/// Page through the authenticated user's owned repositories
async fn fetch_owned_repositories() -> Result<Vec<ExportedRepo>> {
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        info!("fetching page {}", page);
        let endpoint = format!(
            "user/repos?type=owner&sort=created&direction=desc&per_page={PER_PAGE}&page={page}"
        );
        let batch: Vec<ExportedRepo> = gh_api_json(&endpoint).await?;
        let count = batch.len();
        all.extend(batch);
        if count < PER_PAGE {
            break;
        }
        page += 1;
    }

    Ok(all)
}

/// Drop archived repositories from the export
fn retain_active(repos: Vec<ExportedRepo>) -> Vec<ExportedRepo> {
    let total = repos.len();
    let active: Vec<ExportedRepo> = repos.into_iter().filter(|r| !r.archived).collect();
    if active.len() < total {
        info!("skipping {} archived repositories", total - active.len());
    }
    active
}

/// Language names from a byte-count breakdown, most prominent first
fn language_names(breakdown: &Map<String, Value>) -> Vec<String> {
    breakdown.keys().cloned().collect()
}

/// Write both output files into the data directory
fn write_export(
    out_dir: &Path,
    repos: &[ExportedRepo],
    languages: &Map<String, Value>,
) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let repos_path = out_dir.join("repos.json");
    std::fs::write(&repos_path, serde_json::to_string_pretty(repos)?)
        .with_context(|| format!("failed to write {}", repos_path.display()))?;

    let languages_path = out_dir.join("languages.json");
    std::fs::write(&languages_path, serde_json::to_string_pretty(languages)?)
        .with_context(|| format!("failed to write {}", languages_path.display()))?;

    Ok(())
}
