use axum::routing::get;
use axum::Router;

use crate::api::{articles, catalog, languages, search};
use crate::state::AppState;

/// All JSON endpoints, without the Leptos pages.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/search", get(search::language_search_handler))
        .route("/api/catalog/search", get(search::catalog_search_handler))
        .route("/api/suggestions", get(search::suggestions_handler))
        .route("/api/catalog", get(catalog::list_catalog_handler))
        .route("/api/catalog/{id}", get(catalog::get_document_handler))
        .route("/api/libraries", get(catalog::list_libraries_handler))
        .route("/api/libraries/{id}", get(catalog::get_library_handler))
        .route(
            "/api/languages",
            get(languages::list_languages_handler).post(languages::create_language_handler),
        )
        .route(
            "/api/languages/{name}",
            get(languages::get_language_handler)
                .put(languages::update_language_handler)
                .delete(languages::delete_language_handler),
        )
        .route(
            "/api/articles",
            get(articles::list_articles_handler).post(articles::create_article_handler),
        )
        .route(
            "/api/articles/{slug}",
            get(articles::get_article_handler)
                .put(articles::update_article_handler)
                .delete(articles::delete_article_handler),
        )
}
