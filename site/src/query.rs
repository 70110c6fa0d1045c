//! Query-string state for the page URL
//!
//! The page URL's query string is the single source of truth for the active
//! filters: it survives reloads and makes a filtered view shareable as a
//! link. The manager never touches the URL directly; it is handed a
//! [`QueryParams`] capability at construction so tests can substitute a
//! seeded in-memory URL.

use url::Url;

/// Read/write access to the query string of the current page URL.
///
/// All three operations are idempotent, use replace semantics, and leave
/// unrelated parameters untouched.
pub trait QueryParams {
    /// Current value of a named parameter, or `None` if unset.
    fn get(&self, name: &str) -> Option<String>;

    /// Set a parameter, replacing any existing occurrence in place.
    fn set(&mut self, name: &str, value: &str);

    /// Delete a parameter.
    fn remove(&mut self, name: &str);

    /// The URL's path plus query string, e.g. `/?language=Rust`.
    fn path_and_query(&self) -> String;
}

/// [`QueryParams`] backed by a parsed URL.
#[derive(Debug, Clone)]
pub struct UrlQueryParams {
    url: Url,
}

impl UrlQueryParams {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Build from a path-and-query string like `/?language=Rust`. The host
    /// is irrelevant; only path and query are ever surfaced.
    pub fn for_path(path_and_query: &str) -> Self {
        let base = Url::parse("http://localhost/").expect("static base URL");
        let url = base.join(path_and_query).unwrap_or(base);
        Self { url }
    }

    fn write_pairs(&mut self, pairs: Vec<(String, String)>) {
        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            let mut serializer = self.url.query_pairs_mut();
            serializer.clear();
            serializer.extend_pairs(pairs);
        }
    }
}

impl QueryParams for UrlQueryParams {
    fn get(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    fn set(&mut self, name: &str, value: &str) {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut replaced = false;
        for (key, existing) in self.url.query_pairs().into_owned() {
            if key == name {
                // Replace the first occurrence in place, drop duplicates.
                if !replaced {
                    pairs.push((key, value.to_string()));
                    replaced = true;
                }
            } else {
                pairs.push((key, existing));
            }
        }
        if !replaced {
            pairs.push((name.to_string(), value.to_string()));
        }
        self.write_pairs(pairs);
    }

    fn remove(&mut self, name: &str) {
        let pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .into_owned()
            .filter(|(key, _)| key != name)
            .collect();
        self.write_pairs(pairs);
    }

    fn path_and_query(&self) -> String {
        match self.url.query() {
            Some(query) => format!("{}?{}", self.url.path(), query),
            None => self.url.path().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_current_value() {
        let params = UrlQueryParams::for_path("/?language=Rust&topic=cli");
        assert_eq!(params.get("language").as_deref(), Some("Rust"));
        assert_eq!(params.get("topic").as_deref(), Some("cli"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut params = UrlQueryParams::for_path("/?language=Rust&topic=cli");
        params.set("language", "Python");
        assert_eq!(params.path_and_query(), "/?language=Python&topic=cli");
    }

    #[test]
    fn set_appends_when_absent() {
        let mut params = UrlQueryParams::for_path("/");
        params.set("language", "Rust");
        assert_eq!(params.path_and_query(), "/?language=Rust");
    }

    #[test]
    fn set_is_idempotent() {
        let mut params = UrlQueryParams::for_path("/?language=Rust");
        params.set("language", "Rust");
        params.set("language", "Rust");
        assert_eq!(params.path_and_query(), "/?language=Rust");
    }

    #[test]
    fn remove_deletes_only_named_parameter() {
        let mut params = UrlQueryParams::for_path("/?language=Rust&topic=cli");
        params.remove("topic");
        assert_eq!(params.path_and_query(), "/?language=Rust");
    }

    #[test]
    fn remove_is_idempotent() {
        let mut params = UrlQueryParams::for_path("/?language=Rust");
        params.remove("topic");
        params.remove("topic");
        assert_eq!(params.path_and_query(), "/?language=Rust");
    }

    #[test]
    fn last_parameter_removed_drops_query_string() {
        let mut params = UrlQueryParams::for_path("/?language=Rust");
        params.remove("language");
        assert_eq!(params.path_and_query(), "/");
    }

    #[test]
    fn unrelated_parameters_survive() {
        let mut params = UrlQueryParams::for_path("/?ref=mastodon&language=Rust");
        params.set("language", "Go");
        params.remove("language");
        assert_eq!(params.path_and_query(), "/?ref=mastodon");
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut params = UrlQueryParams::for_path("/");
        params.set("language", "Jupyter Notebook");
        assert_eq!(params.path_and_query(), "/?language=Jupyter+Notebook");
        assert_eq!(params.get("language").as_deref(), Some("Jupyter Notebook"));
    }
}
