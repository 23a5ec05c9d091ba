use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::errors::bad_json;
use crate::db::models::{
    CreateLanguageRequest, LanguageEntry, MessageResponse, UpdateLanguageRequest,
};
use crate::db::repository::LanguageRepository;
use crate::error::AppError;
use crate::state::AppState;

/// Validate and store a new language entry.
pub async fn create_language(
    repo: &dyn LanguageRepository,
    request: CreateLanguageRequest,
) -> Result<LanguageEntry, AppError> {
    let name = request
        .name
        .as_deref()
        .map(LanguageEntry::normalize_name)
        .filter(|n| !n.is_empty());

    let mut missing = Vec::new();
    if name.is_none() {
        missing.push("name");
    }
    if request.documentation.is_none() {
        missing.push("documentation");
    }

    let (Some(name), Some(documentation)) = (name, request.documentation) else {
        return Err(AppError::missing_fields(&missing));
    };

    let entry = LanguageEntry {
        name,
        documentation,
        commands: request.commands,
    };
    repo.create(entry.clone()).await?;
    tracing::info!(language = %entry.name, "language created");

    Ok(entry)
}

/// Apply a partial update to an existing language entry.
pub async fn update_language(
    repo: &dyn LanguageRepository,
    name: &str,
    request: UpdateLanguageRequest,
) -> Result<LanguageEntry, AppError> {
    if request.documentation.is_none() && request.commands.is_none() {
        return Err(AppError::BadRequest(
            "At least one of the following fields is required: documentation, commands".into(),
        ));
    }

    let name = LanguageEntry::normalize_name(name);
    let mut entry = repo
        .get(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Language '{}' not found", name)))?;

    if let Some(documentation) = request.documentation {
        entry.documentation = documentation;
    }
    if let Some(commands) = request.commands {
        entry.commands = commands;
    }

    repo.update(entry.clone()).await?;
    tracing::info!(language = %entry.name, "language updated");

    Ok(entry)
}

pub async fn get_language(repo: &dyn LanguageRepository, name: &str) -> Result<LanguageEntry, AppError> {
    let name = LanguageEntry::normalize_name(name);
    repo.get(&name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Language '{}' not found", name)))
}

pub async fn delete_language(
    repo: &dyn LanguageRepository,
    name: &str,
) -> Result<MessageResponse, AppError> {
    let name = LanguageEntry::normalize_name(name);
    repo.delete(&name).await?;
    tracing::info!(language = %name, "language deleted");

    Ok(MessageResponse {
        message: format!("Language '{}' deleted", name),
    })
}

/// `GET /api/languages`
pub async fn list_languages_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LanguageEntry>>, AppError> {
    Ok(Json(state.language_repo.list().await?))
}

/// `POST /api/languages`
pub async fn create_language_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLanguageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LanguageEntry>), AppError> {
    let Json(request) = payload.map_err(bad_json)?;
    let entry = create_language(state.language_repo.as_ref(), request).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// `GET /api/languages/{name}`
pub async fn get_language_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LanguageEntry>, AppError> {
    Ok(Json(get_language(state.language_repo.as_ref(), &name).await?))
}

/// `PUT /api/languages/{name}`
pub async fn update_language_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<UpdateLanguageRequest>, JsonRejection>,
) -> Result<Json<LanguageEntry>, AppError> {
    let Json(request) = payload.map_err(bad_json)?;
    Ok(Json(
        update_language(state.language_repo.as_ref(), &name, request).await?,
    ))
}

/// `DELETE /api/languages/{name}`
pub async fn delete_language_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(
        delete_language(state.language_repo.as_ref(), &name).await?,
    ))
}
