//! REST API handlers

use axum::{extract::State, Json};
use serde::Serialize;

use super::state::AppState;

/// One card's machine-readable view
#[derive(Debug, Serialize)]
pub struct CardInfo {
    pub name: String,
    pub languages: Vec<String>,
    pub topics: Vec<String>,
    pub hidden: bool,
}

/// List repos response
#[derive(Debug, Serialize)]
pub struct ReposResponse {
    pub repos: Vec<CardInfo>,
    pub total: usize,
    pub visible: usize,
}

/// List every card with its attached filter attributes and current
/// visibility
pub async fn list_repos(State(state): State<AppState>) -> Json<ReposResponse> {
    let manager = state.manager.lock().await;
    let repos: Vec<CardInfo> = manager
        .cards()
        .iter()
        .map(|card| CardInfo {
            name: card.name().to_string(),
            languages: card.languages().map(str::to_string).collect(),
            topics: card.topics().map(str::to_string).collect(),
            hidden: card.is_hidden(),
        })
        .collect();
    let visible = repos.iter().filter(|r| !r.hidden).count();

    Json(ReposResponse {
        total: repos.len(),
        visible,
        repos,
    })
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub repositories: usize,
    pub languages: usize,
    pub topics: usize,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let manager = state.manager.lock().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        repositories: manager.repo_count(),
        languages: manager.languages_list().len(),
        topics: manager.topics_list().len(),
    })
}
