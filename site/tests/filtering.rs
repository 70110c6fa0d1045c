//! End-to-end filtering scenarios: exported data on disk through loading,
//! card creation, and the dual-axis filter.

use folio_site::cards::CardTemplate;
use folio_site::data;
use folio_site::manager::{FilterAxis, RepoManager};
use folio_site::page::PageMounts;
use folio_site::query::UrlQueryParams;

fn write_sample_data(dir: &std::path::Path) {
    std::fs::write(
        dir.join("repos.json"),
        r#"[
            {
                "name": "a",
                "html_url": "https://github.com/me/a",
                "description": "a command line thing",
                "homepage": "https://a.example.com/",
                "topics": ["cli"],
                "visibility": "public",
                "created_at": "2021-03-02T09:00:00Z"
            },
            {
                "name": "b",
                "html_url": "https://github.com/me/b",
                "topics": ["ml"],
                "visibility": "private"
            }
        ]"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("languages.json"),
        r#"{"a": ["TypeScript", "HTML"], "b": ["Python"]}"#,
    )
    .unwrap();
}

fn manager_from(dir: &std::path::Path, path: &str) -> RepoManager {
    let repos = data::load_repositories(dir).unwrap();
    RepoManager::new(
        repos,
        PageMounts::new(CardTemplate::default()),
        Box::new(UrlQueryParams::for_path(path)),
    )
}

fn visible_names(manager: &RepoManager) -> Vec<&str> {
    manager.visible_cards().map(|c| c.name()).collect()
}

#[test]
fn exported_data_becomes_cards_with_denylisted_languages_stripped() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_data(dir.path());

    let manager = manager_from(dir.path(), "/");
    let card_a = &manager.cards()[0];

    // HTML is denylisted: gone from the attribute, still an icon on the card.
    assert_eq!(card_a.languages_attr(), "TypeScript");
    assert_eq!(card_a.topics_attr(), "cli");
    assert_eq!(card_a.badges().len(), 2);

    assert_eq!(card_a.description(), Some("a command line thing"));
    assert_eq!(card_a.homepage_label(), Some("a.example.com"));
    assert_eq!(card_a.homepage_href(), Some("https://a.example.com/"));
    assert_eq!(card_a.timestamp(), Some("Mar 2, 2021"));
    assert!(!card_a.shows_private_badge());

    let card_b = &manager.cards()[1];
    assert!(card_b.shows_private_badge());
    assert!(card_b.description().is_none());
    assert!(card_b.timestamp().is_none());
}

#[test]
fn language_selection_hides_non_matching_cards_and_gates_topics() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_data(dir.path());

    let mut manager = manager_from(dir.path(), "/");
    assert_eq!(visible_names(&manager), vec!["a", "b"]);

    manager.on_language_changed("Python");
    assert_eq!(visible_names(&manager), vec!["b"]);

    // "cli" belongs only to the now-hidden card "a".
    let disabled: Vec<&str> = manager
        .topic_select()
        .options()
        .iter()
        .filter(|o| o.disabled)
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(disabled, vec!["cli"]);
}

#[test]
fn stale_topic_from_url_hides_everything_until_cleared() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_data(dir.path());

    let mut manager = manager_from(dir.path(), "/?language=Python&topic=renamed-topic");
    assert!(visible_names(&manager).is_empty());
    assert_eq!(
        manager.location(),
        "/?language=Python&topic=renamed-topic"
    );

    manager.on_topic_changed("");
    assert_eq!(manager.location(), "/?language=Python");
    assert_eq!(visible_names(&manager), vec!["b"]);
}

#[test]
fn filters_survive_a_reload_through_the_url() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_data(dir.path());

    let mut first = manager_from(dir.path(), "/");
    first.on_language_changed("TypeScript");
    first.on_topic_changed("cli");
    let shared_link = first.location();
    assert_eq!(shared_link, "/?language=TypeScript&topic=cli");

    // A fresh manager seeded with the shared link reproduces the view.
    let reloaded = manager_from(dir.path(), &shared_link);
    assert_eq!(visible_names(&reloaded), vec!["a"]);
    assert_eq!(reloaded.language_select().selected(), "TypeScript");
    assert_eq!(reloaded.topic_select().selected(), "cli");
}

#[test]
fn selection_state_and_disabled_options_render_into_the_page() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_data(dir.path());

    let mut manager = manager_from(dir.path(), "/");
    manager.on_language_changed("Python");

    let site = folio_site::web::state::SiteInfo {
        title: "Projects".to_string(),
        owner: None,
    };
    let page = folio_site::web::pages::render_page(&site, &manager).into_string();

    assert!(page.contains(r#"<option value="Python" selected>"#));
    assert!(page.contains(r#"<option value="cli" disabled>"#));
    // Card "a" is hidden but keeps its markup and attributes.
    assert!(page.contains(r#"data-language="TypeScript""#));
    assert!(page.contains(r#"class="repo-card hidden""#));
}
