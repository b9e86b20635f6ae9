//! Page components for the admin console

pub mod contacts;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod instructors;
pub mod login;
pub mod not_found;
pub mod reports;
pub mod settings;
pub mod students;
pub mod tickets;

use chrono::{DateTime, Utc};

/// Human-readable timestamp, or "N/A" when the backend sent none
#[must_use]
pub fn format_time(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(
        || "N/A".to_string(),
        |time| time.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// "N/A" placeholder for optional text fields
#[must_use]
pub fn or_na(value: Option<String>) -> String {
    value
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| "N/A".to_string())
}

/// List-page href carrying the filter query and an optional selection
#[must_use]
pub fn list_href(base: &str, query: &str, selected: Option<&str>) -> String {
    let mut href = format!("{base}?q={}", urlencoding::encode(query));
    if let Some(id) = selected {
        href.push_str("&selected=");
        href.push_str(&urlencoding::encode(id));
    }
    href
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_href_encodes_query() {
        assert_eq!(list_href("/instructors", "", None), "/instructors?q=");
        assert_eq!(
            list_href("/instructors", "a b", Some("abc123")),
            "/instructors?q=a%20b&selected=abc123"
        );
    }

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("  ".to_string())), "N/A");
        assert_eq!(or_na(Some("x".to_string())), "x");
    }
}
