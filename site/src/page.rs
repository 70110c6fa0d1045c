//! In-memory model of the page's mount points
//!
//! The manager never reaches into ambient page state; it is handed these
//! mounts at construction: a container for the cards, the shared card
//! template, and the two single-selection filter controls, each pre-seeded
//! with an unconstrained option.

use crate::cards::{Card, CardTemplate};

/// One option in a select control
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

/// A single-selection filter control
#[derive(Debug, Clone)]
pub struct SelectControl {
    name: String,
    options: Vec<SelectOption>,
    selected: String,
}

impl SelectControl {
    /// Create a control pre-seeded with the unconstrained option (empty
    /// value), which is always enabled.
    pub fn new(name: impl Into<String>, unconstrained_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: vec![SelectOption {
                value: String::new(),
                label: unconstrained_label.into(),
                disabled: false,
            }],
            selected: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Append an option whose label equals its value
    pub fn append_option(&mut self, value: &str) {
        self.options.push(SelectOption {
            value: value.to_string(),
            label: value.to_string(),
            disabled: false,
        });
    }

    /// Reflect a selection. The value is kept verbatim even when no option
    /// matches, so a stale URL value round-trips instead of crashing.
    pub fn select(&mut self, value: &str) {
        self.selected = value.to_string();
    }

    pub fn enable_all(&mut self) {
        for option in &mut self.options {
            option.disabled = false;
        }
    }

    /// Disable every concrete option not in `available`. The unconstrained
    /// option stays enabled.
    pub fn restrict_to(&mut self, available: &std::collections::HashSet<String>) {
        for option in &mut self.options {
            option.disabled = !option.value.is_empty() && !available.contains(&option.value);
        }
    }
}

/// Container the cards are appended into
#[derive(Debug, Default)]
pub struct CardContainer {
    cards: Vec<Card>,
}

impl CardContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a whole batch of cards in one append
    pub fn append_all(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn visible(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| !card.is_hidden())
    }
}

/// Everything the manager mounts into: card container, card template, and
/// the two filter controls.
#[derive(Debug)]
pub struct PageMounts {
    pub cards: CardContainer,
    pub template: CardTemplate,
    pub language_select: SelectControl,
    pub topic_select: SelectControl,
}

impl PageMounts {
    pub fn new(template: CardTemplate) -> Self {
        Self {
            cards: CardContainer::new(),
            template,
            language_select: SelectControl::new("language", "All languages"),
            topic_select: SelectControl::new("topic", "All topics"),
        }
    }
}
