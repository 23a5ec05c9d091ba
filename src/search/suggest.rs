use crate::catalog::Catalog;
use crate::search::query::normalize;

/// Queries shorter than this (in characters) produce no suggestions.
pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_SUGGESTIONS: usize = 10;

/// Completion candidates for a raw query: matching document titles first,
/// then matching named commands, without duplicates and capped at
/// [`MAX_SUGGESTIONS`].
pub fn suggestions(catalog: &Catalog, raw: &str) -> Vec<String> {
    let query = normalize(raw);
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let titles = catalog.documents.iter().map(|d| d.title.as_str());
    let commands = catalog.commands.iter().map(|c| c.name.as_str());

    let mut out: Vec<String> = Vec::new();
    for candidate in titles.chain(commands) {
        if out.len() == MAX_SUGGESTIONS {
            break;
        }
        if candidate.to_lowercase().contains(&query) && !out.iter().any(|s| s == candidate) {
            out.push(candidate.to_string());
        }
    }
    out
}
