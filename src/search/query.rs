/// Prefix switching a query into single-library lookup mode.
pub const LIBRARY_PREFIX: &str = "library:";

/// Lower-case and trim a raw query. Every comparison uses this form.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-insensitive containment of an already-normalized needle.
pub fn contains(haystack: &str, normalized_query: &str) -> bool {
    haystack.to_lowercase().contains(normalized_query)
}

/// Library id addressed by a `library:<id>` query, if the raw query uses that mode.
pub fn library_id(raw: &str) -> Option<&str> {
    raw.strip_prefix(LIBRARY_PREFIX).map(str::trim)
}
