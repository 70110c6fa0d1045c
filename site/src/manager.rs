//! Repository manager: owns the collection and the dual-axis filter
//!
//! The manager builds the derived lookup tables once, creates every card
//! once (batched), and from then on only toggles card visibility in
//! response to filter changes. The two filter controls, the page URL, and
//! the rendered cards stay mutually consistent: every change goes through
//! [`RepoManager::set_filter`], which updates all three before returning.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::cards::{Card, CardFactory};
use crate::icons;
use crate::model::Repository;
use crate::page::{PageMounts, SelectControl};
use crate::query::QueryParams;

/// The two filter axes. Each holds either an empty value (unconstrained) or
/// exactly one selected value; both combine with logical AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAxis {
    Language,
    Topic,
}

impl FilterAxis {
    /// URL query parameter name for this axis
    pub fn param_name(self) -> &'static str {
        match self {
            FilterAxis::Language => "language",
            FilterAxis::Topic => "topic",
        }
    }
}

#[derive(Debug, Clone, Default)]
struct FilterState {
    language: String,
    topic: String,
}

impl FilterState {
    fn get(&self, axis: FilterAxis) -> &str {
        match axis {
            FilterAxis::Language => &self.language,
            FilterAxis::Topic => &self.topic,
        }
    }

    fn set(&mut self, axis: FilterAxis, value: &str) {
        match axis {
            FilterAxis::Language => self.language = value.to_string(),
            FilterAxis::Topic => self.topic = value.to_string(),
        }
    }
}

pub struct RepoManager {
    repos: Vec<Repository>,
    languages_by_repo: HashMap<String, Vec<String>>,
    topics_by_repo: HashMap<String, Vec<String>>,
    mounts: PageMounts,
    filters: FilterState,
    query: Box<dyn QueryParams + Send>,
}

impl RepoManager {
    /// Build the lookup tables, populate the filter controls, create all
    /// cards in one batched insert, then read the initial filter values
    /// from the URL and apply them.
    pub fn new(
        repos: Vec<Repository>,
        mounts: PageMounts,
        query: Box<dyn QueryParams + Send>,
    ) -> Self {
        let languages_by_repo = build_languages_map(&repos);
        let topics_by_repo = build_topics_map(&repos);

        let mut manager = Self {
            repos,
            languages_by_repo,
            topics_by_repo,
            mounts,
            filters: FilterState::default(),
            query,
        };

        manager.populate_filters();
        manager.create_cards();

        let initial_language = manager.query.get(FilterAxis::Language.param_name());
        let initial_topic = manager.query.get(FilterAxis::Topic.param_name());
        manager.set_filter(FilterAxis::Language, &initial_language.unwrap_or_default());
        manager.set_filter(FilterAxis::Topic, &initial_topic.unwrap_or_default());

        manager
    }

    /// Sorted, deduplicated union of all languages after denylisting
    pub fn languages_list(&self) -> Vec<String> {
        let set: BTreeSet<&String> = self.languages_by_repo.values().flatten().collect();
        set.into_iter().cloned().collect()
    }

    /// Sorted, deduplicated union of all topics
    pub fn topics_list(&self) -> Vec<String> {
        let set: BTreeSet<&String> = self.topics_by_repo.values().flatten().collect();
        set.into_iter().cloned().collect()
    }

    fn populate_filters(&mut self) {
        for language in self.languages_list() {
            self.mounts.language_select.append_option(&language);
        }
        for topic in self.topics_list() {
            self.mounts.topic_select.append_option(&topic);
        }
    }

    fn create_cards(&mut self) {
        let factory = CardFactory::new(self.mounts.template);
        let cards = self
            .repos
            .iter()
            .map(|repo| factory.create_card(repo, &self.languages_by_repo, &self.topics_by_repo))
            .collect();
        self.mounts.cards.append_all(cards);
    }

    /// Current value of a filter axis (empty = unconstrained)
    pub fn filter(&self, axis: FilterAxis) -> &str {
        self.filters.get(axis)
    }

    /// Update one axis: in-memory state, the control's selection, the URL
    /// parameter (removed when unconstrained), then card visibility.
    pub fn set_filter(&mut self, axis: FilterAxis, value: &str) {
        self.filters.set(axis, value);

        let select = match axis {
            FilterAxis::Language => &mut self.mounts.language_select,
            FilterAxis::Topic => &mut self.mounts.topic_select,
        };
        select.select(value);

        if value.is_empty() {
            self.query.remove(axis.param_name());
        } else {
            self.query.set(axis.param_name(), value);
        }

        self.apply_visibility();
    }

    /// Language selection changed: set the filter, clear the topic filter
    /// (topics are scoped to the visible language set), then recompute which
    /// topic options remain selectable.
    pub fn on_language_changed(&mut self, value: &str) {
        self.set_filter(FilterAxis::Language, value);
        self.update_topic_options();
    }

    /// Topic selection changed. Language options are never gated by topic;
    /// the asymmetry is intentional, language being the primary facet.
    pub fn on_topic_changed(&mut self, value: &str) {
        self.set_filter(FilterAxis::Topic, value);
    }

    fn update_topic_options(&mut self) {
        self.set_filter(FilterAxis::Topic, "");

        if self.filters.language.is_empty() {
            self.mounts.topic_select.enable_all();
            return;
        }

        let available: HashSet<String> = self
            .mounts
            .cards
            .visible()
            .flat_map(|card| card.topics().map(str::to_string))
            .collect();
        self.mounts.topic_select.restrict_to(&available);
    }

    /// Recompute every card's hidden flag from the current filter pair.
    pub fn apply_visibility(&mut self) {
        if self.filters.language.is_empty() && self.filters.topic.is_empty() {
            for card in self.mounts.cards.cards_mut() {
                card.set_hidden(false);
            }
            return;
        }

        let language = &self.filters.language;
        let topic = &self.filters.topic;
        for card in self.mounts.cards.cards_mut() {
            let language_match = language.is_empty() || card.has_language(language);
            let topic_match = topic.is_empty() || card.has_topic(topic);
            card.set_hidden(!(language_match && topic_match));
        }
    }

    pub fn cards(&self) -> &[Card] {
        self.mounts.cards.cards()
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.mounts.cards.visible()
    }

    pub fn language_select(&self) -> &SelectControl {
        &self.mounts.language_select
    }

    pub fn topic_select(&self) -> &SelectControl {
        &self.mounts.topic_select
    }

    pub fn repo_count(&self) -> usize {
        self.repos.len()
    }

    /// Canonical page location (path plus query) for the current state
    pub fn location(&self) -> String {
        self.query.path_and_query()
    }

    /// Replace the URL capability, as happens when the page is loaded at a
    /// new location. Filter state is not re-read here; the caller decides
    /// how the new location's parameters map onto filter operations.
    pub fn set_location(&mut self, query: Box<dyn QueryParams + Send>) {
        self.query = query;
    }
}

fn build_languages_map(repos: &[Repository]) -> HashMap<String, Vec<String>> {
    repos
        .iter()
        .map(|repo| {
            let languages = repo
                .languages
                .iter()
                .filter(|language| !icons::is_hidden_language(language))
                .cloned()
                .collect();
            (repo.name.clone(), languages)
        })
        .collect()
}

fn build_topics_map(repos: &[Repository]) -> HashMap<String, Vec<String>> {
    repos
        .iter()
        .map(|repo| (repo.name.clone(), repo.topics.clone()))
        .collect()
}
