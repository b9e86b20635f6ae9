//! Validation and filtering helpers shared across crates

use regex::Regex;
use std::sync::LazyLock;

/// Pattern of a backend entity identifier (24 hexadecimal characters)
#[allow(clippy::unwrap_used)]
static OBJECT_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[0-9a-fA-F]{24}$").unwrap());

/// Whether `id` is a well-formed backend entity identifier.
#[must_use]
pub fn is_object_id(id: &str) -> bool {
    OBJECT_ID.is_match(id)
}

/// Case-insensitive substring match used by every list filter.
///
/// An empty (or whitespace-only) query matches everything.
#[must_use]
pub fn matches_query(haystack: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Split a comma-separated input into trimmed, non-empty entries.
///
/// Used by the instructor/student enrollment forms, which collect
/// expertise/skills/interests as one comma-separated field.
#[must_use]
pub fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
