use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::models::document::{Document, DocumentSummary, Library};
use crate::state::AppState;

/// `GET /api/catalog` — one summary per document, in catalog order.
pub async fn list_catalog_handler(State(state): State<AppState>) -> Json<Vec<DocumentSummary>> {
    Json(state.catalog.documents.iter().map(Document::summary).collect())
}

/// `GET /api/catalog/{id}`
pub async fn get_document_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, AppError> {
    state
        .catalog
        .find_document(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Document '{}' not found", id)))
}

/// `GET /api/libraries`
pub async fn list_libraries_handler(State(state): State<AppState>) -> Json<Vec<Library>> {
    Json(state.catalog.libraries.clone())
}

/// `GET /api/libraries/{id}`
pub async fn get_library_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Library>, AppError> {
    state
        .catalog
        .find_library(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Library '{}' not found", id)))
}
