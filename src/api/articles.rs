use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::errors::bad_json;
use crate::db::article_repository::ArticleRepository;
use crate::db::models::{
    Article, ArticleKind, CreateArticleRequest, MessageResponse, RenderedArticle,
    UpdateArticleRequest,
};
use crate::error::AppError;
use crate::rendering::markdown::render_markdown;
use crate::state::AppState;

/// Query string of `GET /api/articles`.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleListQuery {
    pub kind: Option<String>,
}

fn parse_kind(raw: &str) -> Result<ArticleKind, AppError> {
    ArticleKind::from_str_ci(raw).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid article kind '{}'. Expected: framework, tutorial, project",
            raw
        ))
    })
}

fn validate_slug(slug: &str) -> Result<(), AppError> {
    let valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !valid {
        return Err(AppError::BadRequest(format!(
            "Invalid slug '{}'. Use lowercase letters, digits, '-' and '_'",
            slug
        )));
    }
    Ok(())
}

/// Validate a creation request and store the new article.
pub async fn create_article(
    repo: &dyn ArticleRepository,
    request: CreateArticleRequest,
) -> Result<Article, AppError> {
    let slug = request.slug.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    let title = request.title.filter(|t| !t.trim().is_empty());

    let mut missing = Vec::new();
    if slug.is_none() {
        missing.push("slug");
    }
    if request.kind.is_none() {
        missing.push("kind");
    }
    if title.is_none() {
        missing.push("title");
    }
    if request.body.is_none() {
        missing.push("body");
    }

    let (Some(slug), Some(kind), Some(title), Some(body)) =
        (slug, request.kind, title, request.body)
    else {
        return Err(AppError::missing_fields(&missing));
    };

    validate_slug(&slug)?;
    let kind = parse_kind(&kind)?;

    let now = Utc::now();
    let article = Article {
        id: Uuid::new_v4(),
        slug,
        kind,
        title,
        summary: request.summary,
        body,
        tags: request.tags,
        created_at: now,
        updated_at: now,
    };

    repo.create(article.clone()).await?;
    tracing::info!(slug = %article.slug, kind = %article.kind, "article created");

    Ok(article)
}

/// Apply the provided fields to an existing article.
pub async fn update_article(
    repo: &dyn ArticleRepository,
    slug: &str,
    request: UpdateArticleRequest,
) -> Result<Article, AppError> {
    let mut article = repo
        .get(slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", slug)))?;

    if let Some(kind) = request.kind {
        article.kind = parse_kind(&kind)?;
    }
    if let Some(title) = request.title {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("Title cannot be empty".into()));
        }
        article.title = title;
    }
    if let Some(summary) = request.summary {
        article.summary = summary;
    }
    if let Some(body) = request.body {
        article.body = body;
    }
    if let Some(tags) = request.tags {
        article.tags = tags;
    }
    article.updated_at = Utc::now();

    repo.update(article.clone()).await?;
    tracing::info!(slug = %article.slug, "article updated");

    Ok(article)
}

/// Fetch an article and render its Markdown body.
pub async fn get_rendered_article(
    repo: &dyn ArticleRepository,
    slug: &str,
) -> Result<RenderedArticle, AppError> {
    let article = repo
        .get(slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", slug)))?;

    let html = render_markdown(&article.body);
    Ok(RenderedArticle { article, html })
}

/// `GET /api/articles?kind=`
pub async fn list_articles_handler(
    State(state): State<AppState>,
    Query(params): Query<ArticleListQuery>,
) -> Result<Json<Vec<Article>>, AppError> {
    let kind = params.kind.as_deref().map(parse_kind).transpose()?;
    Ok(Json(state.article_repo.list(kind).await?))
}

/// `POST /api/articles`
pub async fn create_article_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Article>), AppError> {
    let Json(request) = payload.map_err(bad_json)?;
    let article = create_article(state.article_repo.as_ref(), request).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// `GET /api/articles/{slug}`
pub async fn get_article_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<RenderedArticle>, AppError> {
    Ok(Json(
        get_rendered_article(state.article_repo.as_ref(), &slug).await?,
    ))
}

/// `PUT /api/articles/{slug}`
pub async fn update_article_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    payload: Result<Json<UpdateArticleRequest>, JsonRejection>,
) -> Result<Json<Article>, AppError> {
    let Json(request) = payload.map_err(bad_json)?;
    Ok(Json(
        update_article(state.article_repo.as_ref(), &slug, request).await?,
    ))
}

/// `DELETE /api/articles/{slug}`
pub async fn delete_article_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.article_repo.delete(&slug).await?;
    tracing::info!(slug = %slug, "article deleted");

    Ok(Json(MessageResponse {
        message: format!("Article '{}' deleted", slug),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::article_repository::{InMemoryArticleRepository, MockArticleRepository};

    fn request(slug: &str) -> CreateArticleRequest {
        CreateArticleRequest {
            slug: Some(slug.to_string()),
            kind: Some("Tutorial".to_string()),
            title: Some("Intro to Tokio".to_string()),
            summary: "Async runtime basics".to_string(),
            body: Some("# Tokio\n\n**Spawn** tasks.".to_string()),
            tags: vec!["rust".to_string(), "async".to_string()],
        }
    }

    #[tokio::test]
    async fn test_create_article_success() {
        let repo = InMemoryArticleRepository::new();
        let article = create_article(&repo, request("intro-to-tokio")).await.unwrap();

        assert_eq!(article.kind, ArticleKind::Tutorial);
        assert_eq!(article.created_at, article.updated_at);
        assert!(repo.get("intro-to-tokio").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_article_missing_fields() {
        let repo = InMemoryArticleRepository::new();
        match create_article(&repo, CreateArticleRequest::default()).await {
            Err(AppError::BadRequest(msg)) => {
                assert_eq!(msg, "Missing required fields: slug, kind, title, body")
            }
            other => panic!("Expected BadRequest error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_article_invalid_kind() {
        let repo = InMemoryArticleRepository::new();
        let mut req = request("intro");
        req.kind = Some("podcast".to_string());
        match create_article(&repo, req).await {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("Invalid article kind")),
            other => panic!("Expected BadRequest error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_article_invalid_slug() {
        let repo = InMemoryArticleRepository::new();
        match create_article(&repo, request("Intro To Tokio")).await {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("Invalid slug")),
            other => panic!("Expected BadRequest error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_article_bumps_timestamp() {
        let repo = InMemoryArticleRepository::new();
        let created = create_article(&repo, request("intro")).await.unwrap();

        let updated = update_article(
            &repo,
            "intro",
            UpdateArticleRequest {
                kind: Some("project".to_string()),
                tags: Some(vec![]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.kind, ArticleKind::Project);
        assert!(updated.tags.is_empty());
        assert_eq!(updated.title, created.title);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_article_rejects_blank_title() {
        let repo = InMemoryArticleRepository::new();
        create_article(&repo, request("intro")).await.unwrap();

        let result = update_article(
            &repo,
            "intro",
            UpdateArticleRequest {
                title: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_get_rendered_article() {
        let repo = InMemoryArticleRepository::new();
        create_article(&repo, request("intro")).await.unwrap();

        let rendered = get_rendered_article(&repo, "intro").await.unwrap();
        assert!(rendered.html.contains("<h1>Tokio</h1>"));
        assert!(rendered.html.contains("<strong>Spawn</strong>"));
    }

    #[tokio::test]
    async fn test_get_rendered_article_not_found() {
        let mut repo = MockArticleRepository::new();
        repo.expect_get().returning(|_| Ok(None));

        assert!(matches!(
            get_rendered_article(&repo, "ghost").await,
            Err(AppError::NotFound(_))
        ));
    }
}
