//! Small display helpers shared by the card factory

use chrono::DateTime;

/// Format an ISO 8601 timestamp as a short human-readable date.
///
/// Returns `None` when the input does not parse; callers hide the timestamp
/// region in that case, the same as when the field is absent.
pub fn format_date(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|date| date.format("%b %-d, %Y").to_string())
}

/// Display text for a homepage URL: strip a leading `https://` scheme and a
/// single trailing slash. The link target keeps the original URL.
pub fn homepage_display(url: &str) -> String {
    let stripped = url.strip_prefix("https://").unwrap_or(url);
    stripped.strip_suffix('/').unwrap_or(stripped).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_timestamps() {
        assert_eq!(
            format_date("2023-04-09T18:20:00Z").as_deref(),
            Some("Apr 9, 2023")
        );
    }

    #[test]
    fn unparseable_date_is_none() {
        assert_eq!(format_date("not-a-date"), None);
        assert_eq!(format_date(""), None);
    }

    #[test]
    fn homepage_strips_scheme_and_trailing_slash() {
        assert_eq!(homepage_display("https://example.com/"), "example.com");
        assert_eq!(homepage_display("https://example.com"), "example.com");
    }

    #[test]
    fn homepage_strips_only_one_trailing_slash() {
        assert_eq!(
            homepage_display("https://example.com/docs//"),
            "example.com/docs/"
        );
    }

    #[test]
    fn homepage_keeps_other_schemes() {
        assert_eq!(homepage_display("http://example.com/"), "http://example.com");
    }
}
