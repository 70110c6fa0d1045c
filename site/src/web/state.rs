//! Shared application state

use std::sync::Arc;

use crate::manager::RepoManager;

/// Site presentation metadata from config
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub title: String,
    pub owner: Option<String>,
}

/// Shared application state
///
/// The manager sits behind a mutex so filter interactions are strictly
/// serialized: each request's URL write and visibility pass complete before
/// the next interaction is applied.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<tokio::sync::Mutex<RepoManager>>,
    pub site: SiteInfo,
}

impl AppState {
    pub fn new(manager: RepoManager, site: SiteInfo) -> Self {
        Self {
            manager: Arc::new(tokio::sync::Mutex::new(manager)),
            site,
        }
    }
}
