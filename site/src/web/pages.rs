//! Page handler and maud templates
//!
//! Each request is one filter interaction. The query string is mapped onto
//! the manager's operations, then the page renders from manager state; when
//! the applied state produces a different canonical URL than the one
//! requested (a topic reset, an empty parameter), the handler answers with a
//! redirect to the canonical form instead.

use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Redirect, Response};
use maud::{html, Markup, DOCTYPE};
use serde::Deserialize;

use super::state::{AppState, SiteInfo};
use crate::manager::{FilterAxis, RepoManager};
use crate::page::SelectControl;
use crate::query::UrlQueryParams;

const DEVICON_CSS: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css";

/// Filter query parameters. A present-but-empty value means an explicit
/// clear; an absent value is only a clear for the topic axis (the language
/// form does not carry a topic field).
#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    pub language: Option<String>,
    pub topic: Option<String>,
}

/// Portfolio page
pub async fn index(
    State(state): State<AppState>,
    uri: Uri,
    Query(params): Query<FilterQuery>,
) -> Response {
    let requested = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());

    let mut manager = state.manager.lock().await;
    manager.set_location(Box::new(UrlQueryParams::for_path(&requested)));
    apply_query(
        &mut manager,
        params.language.as_deref(),
        params.topic.as_deref(),
    );

    let canonical = manager.location();
    if canonical != requested {
        tracing::debug!("redirecting {requested} to canonical {canonical}");
        return Redirect::to(&canonical).into_response();
    }

    Html(render_page(&state.site, &manager).into_string()).into_response()
}

/// Map one request's query parameters onto filter operations.
///
/// A changed language with no topic in the request is the language control
/// submitting (its form carries only `language`), so the topic resets and
/// its options regate. A changed language arriving together with a topic is
/// a reload or shared link, applied the way the initial page load applies
/// URL values: both set, no reset, no gating.
pub(crate) fn apply_query(manager: &mut RepoManager, language: Option<&str>, topic: Option<&str>) {
    let language = language.unwrap_or_default();
    if language != manager.filter(FilterAxis::Language) {
        match topic {
            Some(topic) if !topic.is_empty() => {
                manager.set_filter(FilterAxis::Language, language);
                manager.set_filter(FilterAxis::Topic, topic);
            }
            _ => manager.on_language_changed(language),
        }
    } else {
        match topic {
            Some(topic) if topic != manager.filter(FilterAxis::Topic) => {
                manager.on_topic_changed(topic);
            }
            None if !manager.filter(FilterAxis::Topic).is_empty() => {
                manager.on_topic_changed("");
            }
            _ => {}
        }
    }
}

/// Render the whole page from manager state
pub fn render_page(site: &SiteInfo, manager: &RepoManager) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (site.title) }
                link rel="stylesheet" href="/style.css";
                link rel="stylesheet" href=(DEVICON_CSS);
            }
            body {
                header.page-header {
                    h1 { (site.title) }
                    @if let Some(owner) = &site.owner {
                        p.subtitle { (owner) }
                    }
                }
                section.filters {
                    (filter_form(manager.language_select(), "Language", &[]))
                    (filter_form(
                        manager.topic_select(),
                        "Topic",
                        &[("language", manager.filter(FilterAxis::Language))],
                    ))
                }
                main #repos .repo-list {
                    @for card in manager.cards() { (card.render()) }
                }
                footer {
                    p {
                        (manager.visible_cards().count())
                        " of "
                        (manager.repo_count())
                        " repositories"
                    }
                }
            }
        }
    }
}

/// One single-selection filter control as a self-submitting GET form
fn filter_form(select: &SelectControl, label: &str, hidden_fields: &[(&str, &str)]) -> Markup {
    html! {
        form method="get" action="/" {
            @for (name, value) in hidden_fields {
                @if !value.is_empty() {
                    input type="hidden" name=(name) value=(value);
                }
            }
            label for={ (select.name()) "-filter" } { (label) }
            select id={ (select.name()) "-filter" }
                name=(select.name())
                onchange="this.form.submit()"
            {
                @for option in select.options() {
                    option value=(option.value)
                        selected[option.value == select.selected()]
                        disabled[option.disabled]
                    { (option.label) }
                }
            }
            noscript { button type="submit" { "Apply" } }
        }
    }
}
