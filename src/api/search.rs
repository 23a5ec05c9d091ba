use axum::extract::{Query, State};
use axum::Json;

use crate::error::AppError;
use crate::models::search::{
    LanguageSearchResponse, ScoredDocument, SearchQuery, SuggestionsResponse,
};
use crate::search::engine::search_catalog;
use crate::search::languages::search_languages;
use crate::search::suggest::suggestions;
use crate::state::AppState;

/// `GET /api/catalog/search?q=` — ranked catalog documents, or a single
/// synthesized library for `library:<id>` queries.
pub async fn catalog_search_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<ScoredDocument>> {
    Json(search_catalog(&state.catalog, &SearchQuery::from_pairs(&pairs).q))
}

/// `GET /api/suggestions?q=` — at most ten completion strings.
pub async fn suggestions_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: suggestions(&state.catalog, &SearchQuery::from_pairs(&pairs).q),
    })
}

/// `GET /api/search?q=` — the language reference filtered by the query.
pub async fn language_search_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<LanguageSearchResponse>, AppError> {
    let entries = state.language_repo.list().await?;
    Ok(Json(search_languages(&entries, &SearchQuery::from_pairs(&pairs).q)))
}
