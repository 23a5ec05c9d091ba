use crate::catalog::Catalog;
use crate::models::search::ScoredDocument;
use crate::search::query::{library_id, normalize};
use crate::search::{library, rank};

/// Search the catalog with a raw query.
///
/// `library:<id>` queries resolve against the library registry only; every
/// other query is normalized and ranked over the document collection. Never
/// fails: an empty or unmatched query yields an empty list.
pub fn search_catalog(catalog: &Catalog, raw: &str) -> Vec<ScoredDocument> {
    if let Some(id) = library_id(raw) {
        return library::lookup(catalog, id);
    }

    let query = normalize(raw);
    let results = rank::rank(&catalog.documents, &query);
    tracing::debug!(query = %query, hits = results.len(), "catalog search");
    results
}
