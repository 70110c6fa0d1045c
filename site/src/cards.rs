//! Repository card factory
//!
//! Turns one repository record into one self-contained card. Cards are
//! created exactly once at startup and never regenerated; the only thing
//! that changes afterwards is the `hidden` presentation flag, toggled by the
//! manager's visibility pass. The comma-joined language and topic attribute
//! strings attached here are what the filter predicate matches against.

use std::collections::HashMap;

use maud::{html, Markup};
use serde::Deserialize;

use crate::icons;
use crate::model::Repository;
use crate::util;

/// Which repository timestamp the cards display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampField {
    #[default]
    Created,
    Updated,
}

/// Shared card template configuration. One instance drives every card.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardTemplate {
    pub timestamp: TimestampField,
}

/// One language entry on a card: an icon when the static table has a
/// mapping, a plain text label otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageBadge {
    Icon { name: String, icon: String },
    Label { name: String },
}

#[derive(Debug, Clone)]
struct Homepage {
    href: String,
    label: String,
}

/// The rendered visual unit for one repository.
#[derive(Debug, Clone)]
pub struct Card {
    name: String,
    html_url: String,
    languages_attr: String,
    topics_attr: String,
    visibility_attr: Option<&'static str>,
    description: Option<String>,
    homepage: Option<Homepage>,
    timestamp: Option<String>,
    badges: Vec<LanguageBadge>,
    topics: Vec<String>,
    private: bool,
    hidden: bool,
}

impl Card {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Comma-joined filtered language list, as attached to the card
    pub fn languages_attr(&self) -> &str {
        &self.languages_attr
    }

    /// Comma-joined topic list, as attached to the card
    pub fn topics_attr(&self) -> &str {
        &self.topics_attr
    }

    /// Languages parsed back out of the attached attribute string
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages_attr.split(", ").filter(|l| !l.is_empty())
    }

    /// Topics parsed back out of the attached attribute string
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics_attr.split(", ").filter(|t| !t.is_empty())
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages().any(|l| l == language)
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics().any(|t| t == topic)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn homepage_label(&self) -> Option<&str> {
        self.homepage.as_ref().map(|h| h.label.as_str())
    }

    pub fn homepage_href(&self) -> Option<&str> {
        self.homepage.as_ref().map(|h| h.href.as_str())
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn badges(&self) -> &[LanguageBadge] {
        &self.badges
    }

    pub fn shows_private_badge(&self) -> bool {
        self.private
    }

    /// Render the card as an `<article>`. Hidden regions keep their markup
    /// and attributes; only the `hidden` class changes with state.
    pub fn render(&self) -> Markup {
        html! {
            article.repo-card.hidden[self.hidden]
                data-language=(self.languages_attr)
                data-topics=(self.topics_attr)
                data-visibility=[self.visibility_attr]
            {
                header.repo-header {
                    a.repo-link href=(self.html_url) { (self.name) }
                    span.visibility-private.hidden[!self.private] { "private" }
                }
                p.description.hidden[self.description.is_none()] {
                    @if let Some(description) = &self.description { (description) }
                }
                a.homepage-link.hidden[self.homepage.is_none()]
                    href=[self.homepage.as_ref().map(|h| h.href.as_str())]
                {
                    @if let Some(homepage) = &self.homepage { (homepage.label) }
                }
                p.timestamp.hidden[self.timestamp.is_none()] {
                    @if let Some(date) = &self.timestamp { time { (date) } }
                }
                div.languages.hidden[self.badges.is_empty()] {
                    @for badge in &self.badges {
                        @match badge {
                            LanguageBadge::Icon { name, icon } => {
                                i class={ "devicon-" (icon) " colored" } title=(name) {}
                            }
                            LanguageBadge::Label { name } => {
                                span.language-label { (name) }
                            }
                        }
                    }
                }
                div.topics.hidden[self.topics.is_empty()] {
                    @for topic in &self.topics {
                        span.topic { (topic) }
                    }
                }
            }
        }
    }
}

/// Builds cards from repository records and the two derived lookup tables.
pub struct CardFactory {
    template: CardTemplate,
}

impl CardFactory {
    pub fn new(template: CardTemplate) -> Self {
        Self { template }
    }

    /// Create one card. Deterministic for given inputs: everything on the
    /// card derives from the record, the lookup tables, the static icon
    /// table, and the shared template.
    pub fn create_card(
        &self,
        repo: &Repository,
        languages_by_repo: &HashMap<String, Vec<String>>,
        topics_by_repo: &HashMap<String, Vec<String>>,
    ) -> Card {
        let languages = languages_by_repo
            .get(&repo.name)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let topics = topics_by_repo
            .get(&repo.name)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let raw_timestamp = match self.template.timestamp {
            TimestampField::Created => repo.created_at.as_deref(),
            TimestampField::Updated => repo.updated_at.as_deref(),
        };

        Card {
            name: repo.name.clone(),
            html_url: repo.html_url.clone(),
            languages_attr: languages.join(", "),
            topics_attr: topics.join(", "),
            visibility_attr: repo.visibility.map(|v| v.as_str()),
            description: repo.description.clone().filter(|d| !d.is_empty()),
            homepage: repo
                .homepage
                .as_deref()
                .filter(|h| !h.is_empty())
                .map(|href| Homepage {
                    href: href.to_string(),
                    label: util::homepage_display(href),
                }),
            timestamp: raw_timestamp
                .filter(|t| !t.is_empty())
                .and_then(util::format_date),
            badges: repo.languages.iter().map(|l| language_badge(l)).collect(),
            topics: topics.to_vec(),
            private: repo.is_private(),
            hidden: false,
        }
    }
}

fn language_badge(language: &str) -> LanguageBadge {
    match icons::icon_for(language) {
        Some(icon) => LanguageBadge::Icon {
            name: language.to_string(),
            icon: icon.to_string(),
        },
        None => {
            tracing::warn!("no language icon found for {language}");
            LanguageBadge::Label {
                name: language.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Visibility;

    fn repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/me/{name}"),
            homepage: None,
            topics: Vec::new(),
            visibility: None,
            created_at: None,
            updated_at: None,
            languages: Vec::new(),
        }
    }

    fn tables(
        name: &str,
        languages: &[&str],
        topics: &[&str],
    ) -> (HashMap<String, Vec<String>>, HashMap<String, Vec<String>>) {
        let langs = HashMap::from([(
            name.to_string(),
            languages.iter().map(|s| s.to_string()).collect(),
        )]);
        let tops = HashMap::from([(
            name.to_string(),
            topics.iter().map(|s| s.to_string()).collect(),
        )]);
        (langs, tops)
    }

    #[test]
    fn attaches_joined_attribute_strings() {
        let factory = CardFactory::new(CardTemplate::default());
        let (langs, tops) = tables("demo", &["TypeScript", "Shell"], &["cli", "tools"]);
        let card = factory.create_card(&repo("demo"), &langs, &tops);

        assert_eq!(card.languages_attr(), "TypeScript, Shell");
        assert_eq!(card.topics_attr(), "cli, tools");
        assert!(card.has_language("Shell"));
        assert!(!card.has_language("Rust"));
        assert!(card.has_topic("cli"));
    }

    #[test]
    fn missing_table_entries_leave_attributes_empty() {
        let factory = CardFactory::new(CardTemplate::default());
        let card = factory.create_card(&repo("demo"), &HashMap::new(), &HashMap::new());

        assert_eq!(card.languages_attr(), "");
        assert_eq!(card.topics_attr(), "");
        assert_eq!(card.languages().count(), 0);
        assert!(!card.has_language(""));
    }

    #[test]
    fn optional_regions_hide_when_fields_absent() {
        let factory = CardFactory::new(CardTemplate::default());
        let card = factory.create_card(&repo("demo"), &HashMap::new(), &HashMap::new());

        assert!(card.description().is_none());
        assert!(card.homepage_label().is_none());
        assert!(card.timestamp().is_none());
        let rendered = card.render().into_string();
        assert!(rendered.contains(r#"class="description hidden""#));
        assert!(rendered.contains(r#"class="homepage-link hidden""#));
        assert!(rendered.contains(r#"class="timestamp hidden""#));
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let factory = CardFactory::new(CardTemplate::default());
        let mut r = repo("demo");
        r.description = Some(String::new());
        r.homepage = Some(String::new());
        let card = factory.create_card(&r, &HashMap::new(), &HashMap::new());

        assert!(card.description().is_none());
        assert!(card.homepage_label().is_none());
    }

    #[test]
    fn homepage_display_strips_scheme_but_link_keeps_it() {
        let factory = CardFactory::new(CardTemplate::default());
        let mut r = repo("demo");
        r.homepage = Some("https://example.com/".to_string());
        let card = factory.create_card(&r, &HashMap::new(), &HashMap::new());

        assert_eq!(card.homepage_label(), Some("example.com"));
        assert_eq!(card.homepage_href(), Some("https://example.com/"));
    }

    #[test]
    fn timestamp_field_follows_template_config() {
        let mut r = repo("demo");
        r.created_at = Some("2020-01-15T12:00:00Z".to_string());
        r.updated_at = Some("2024-06-01T12:00:00Z".to_string());

        let created = CardFactory::new(CardTemplate {
            timestamp: TimestampField::Created,
        })
        .create_card(&r, &HashMap::new(), &HashMap::new());
        assert_eq!(created.timestamp(), Some("Jan 15, 2020"));

        let updated = CardFactory::new(CardTemplate {
            timestamp: TimestampField::Updated,
        })
        .create_card(&r, &HashMap::new(), &HashMap::new());
        assert_eq!(updated.timestamp(), Some("Jun 1, 2024"));
    }

    #[test]
    fn unknown_language_renders_as_label_not_dropped() {
        let factory = CardFactory::new(CardTemplate::default());
        let mut r = repo("demo");
        r.languages = vec!["TypeScript".to_string(), "Brainfuck".to_string()];
        let card = factory.create_card(&r, &HashMap::new(), &HashMap::new());

        assert_eq!(card.badges().len(), 2);
        assert_eq!(
            card.badges()[0],
            LanguageBadge::Icon {
                name: "TypeScript".to_string(),
                icon: "typescript-plain".to_string()
            }
        );
        assert_eq!(
            card.badges()[1],
            LanguageBadge::Label {
                name: "Brainfuck".to_string()
            }
        );
    }

    #[test]
    fn private_badge_only_for_private_visibility() {
        let factory = CardFactory::new(CardTemplate::default());

        for (visibility, expected) in [
            (Some(Visibility::Private), true),
            (Some(Visibility::Public), false),
            (Some(Visibility::Internal), false),
            (None, false),
        ] {
            let mut r = repo("demo");
            r.visibility = visibility;
            let card = factory.create_card(&r, &HashMap::new(), &HashMap::new());
            assert_eq!(card.shows_private_badge(), expected);
        }
    }

    #[test]
    fn hidden_card_keeps_attributes_queryable() {
        let factory = CardFactory::new(CardTemplate::default());
        let (langs, tops) = tables("demo", &["Rust"], &["cli"]);
        let mut card = factory.create_card(&repo("demo"), &langs, &tops);

        card.set_hidden(true);
        assert!(card.is_hidden());
        assert_eq!(card.languages_attr(), "Rust");
        assert_eq!(card.topics_attr(), "cli");

        let rendered = card.render().into_string();
        assert!(rendered.contains(r#"data-language="Rust""#));
        assert!(rendered.contains("repo-card hidden"));
    }
}
