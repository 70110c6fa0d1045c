//! Language icon mapping and filter denylist
//!
//! Icon identifiers come from devicon (<https://devicon.dev/>).

/// Language name to devicon identifier. Languages without an entry fall back
/// to a plain text label on the card.
pub const LANGUAGE_ICONS: &[(&str, &str)] = &[
    ("Astro", "astro-plain"),
    ("C", "c-plain"),
    ("CSS", "css3-plain"),
    ("Dockerfile", "docker-plain"),
    ("HCL", "terraform-plain"),
    ("HTML", "html5-plain"),
    ("Java", "java-plain"),
    ("JavaScript", "javascript-plain"),
    ("PHP", "php-plain"),
    ("Python", "python-plain"),
    ("Ruby", "ruby-plain"),
    ("SCSS", "sass-plain"),
    ("Sass", "sass-plain"),
    ("Shell", "bash-plain"),
    ("Solidity", "solidity-plain"),
    ("Svelte", "svelte-plain"),
    ("TypeScript", "typescript-plain"),
    ("Vue", "vuejs-plain"),
];

/// Markup and config languages excluded from the language filter. These are
/// detected by GitHub but are not meaningful as a primary implementation
/// language.
pub const LANGUAGES_TO_HIDE: &[&str] = &[
    "HTML",
    "CSS",
    "Objective-C",
    "Blade",
    "PLpgSQL",
    "PLSQL",
    "XSLT",
    "EJS",
    "Procfile",
    "Starlark",
    "Hack",
    "Twig",
    "Jupyter Notebook",
    "Handlebars",
];

/// Look up the devicon identifier for a language name.
pub fn icon_for(language: &str) -> Option<&'static str> {
    LANGUAGE_ICONS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, icon)| *icon)
}

/// Whether a language is on the filter denylist. Matching is
/// case-insensitive so casing quirks in the detected data cannot smuggle a
/// denylisted language into the filter.
pub fn is_hidden_language(language: &str) -> bool {
    LANGUAGES_TO_HIDE
        .iter()
        .any(|hidden| hidden.eq_ignore_ascii_case(language))
}
