#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use libdev::api::routes::api_routes;
use libdev::catalog::loader::parse_json;
use libdev::catalog::Catalog;
use libdev::db::article_repository::{ArticleRepository, InMemoryArticleRepository};
use libdev::db::models::{Article, ArticleKind, LanguageEntry};
use libdev::db::repository::{InMemoryLanguageRepository, LanguageRepository};
use libdev::error::AppError;
use libdev::state::AppState;

/// Small catalog with known scores for the ranking tests.
///
/// For the query `python`: "Python" scores 15 (title + exact title),
/// "Python Tips" scores 10, "Packaging" scores 1 (one command description).
pub const TEST_CATALOG: &str = r#"{
  "documents": [
    {
      "id": "python",
      "title": "Python",
      "description": "Scripting language",
      "icon": "🐍",
      "colorClass": "python",
      "categories": [
        {
          "name": "Packaging",
          "commands": [{ "syntax": "pip install", "description": "Install packages" }]
        }
      ],
      "examples": [{ "title": "Hello", "code": "print('hi')" }]
    },
    {
      "id": "packaging",
      "title": "Packaging",
      "description": "Shipping code",
      "commands": [{ "syntax": "twine upload", "description": "Upload a python distribution" }]
    },
    {
      "id": "python-tips",
      "title": "Python Tips",
      "description": "Idioms and tricks"
    },
    {
      "id": "rust",
      "title": "Rust",
      "description": "Systems programming",
      "categories": [
        {
          "name": "Cargo",
          "commands": [{ "syntax": "cargo build", "description": "Compile the package" }]
        }
      ]
    }
  ],
  "commands": [
    { "name": "pip install", "language": "python" },
    { "name": "cargo build", "language": "rust" },
    { "name": "cargo test", "language": "rust" }
  ],
  "libraries": [
    {
      "id": "react",
      "name": "React",
      "description": "UI library",
      "language": "javascript",
      "install": [{ "manager": "npm", "command": "npm install react" }],
      "usage": "import React from 'react';",
      "docsUrl": "https://react.dev/"
    }
  ]
}"#;

pub fn test_catalog() -> Catalog {
    parse_json(TEST_CATALOG).expect("Test catalog must be valid")
}

/// Router wired to in-memory stores, plus handles to those stores.
pub struct TestEnv {
    pub router: Router,
    pub language_repo: Arc<dyn LanguageRepository>,
    pub article_repo: Arc<dyn ArticleRepository>,
}

impl TestEnv {
    pub fn start() -> Self {
        let language_repo: Arc<dyn LanguageRepository> =
            Arc::new(InMemoryLanguageRepository::new());
        let article_repo: Arc<dyn ArticleRepository> = Arc::new(InMemoryArticleRepository::new());

        Self {
            router: router_with(language_repo.clone(), article_repo.clone()),
            language_repo,
            article_repo,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.router.clone())
    }

    /// Helper: create a language through the API.
    pub async fn create_language(
        &self,
        server: &axum_test::TestServer,
        name: &str,
        documentation: &str,
    ) -> axum_test::TestResponse {
        server
            .post("/api/languages")
            .json(&serde_json::json!({
                "name": name,
                "documentation": documentation,
                "commands": [
                    { "syntax": format!("{name} --version"), "description": "Print the version" }
                ]
            }))
            .await
    }

    /// Helper: create an article through the API.
    pub async fn create_article(
        &self,
        server: &axum_test::TestServer,
        slug: &str,
        kind: &str,
    ) -> axum_test::TestResponse {
        server
            .post("/api/articles")
            .json(&serde_json::json!({
                "slug": slug,
                "kind": kind,
                "title": format!("About {slug}"),
                "summary": "A short write-up",
                "body": "# Heading\n\nSome *text*.",
                "tags": ["test"]
            }))
            .await
    }
}

fn router_with(
    language_repo: Arc<dyn LanguageRepository>,
    article_repo: Arc<dyn ArticleRepository>,
) -> Router {
    let leptos_options = leptos::prelude::LeptosOptions::builder()
        .output_name("libdev")
        .build();

    let app_state = AppState {
        catalog: Arc::new(test_catalog()),
        language_repo,
        article_repo,
        leptos_options,
    };

    api_routes().with_state(app_state)
}

/// Store whose every operation fails, for exercising the 500 path.
pub struct FailingRepository;

fn unavailable() -> AppError {
    AppError::Database("connection refused: mongodb://secret-host:27017".into())
}

#[async_trait]
impl LanguageRepository for FailingRepository {
    async fn get(&self, _name: &str) -> Result<Option<LanguageEntry>, AppError> {
        Err(unavailable())
    }
    async fn list(&self) -> Result<Vec<LanguageEntry>, AppError> {
        Err(unavailable())
    }
    async fn create(&self, _entry: LanguageEntry) -> Result<(), AppError> {
        Err(unavailable())
    }
    async fn update(&self, _entry: LanguageEntry) -> Result<(), AppError> {
        Err(unavailable())
    }
    async fn delete(&self, _name: &str) -> Result<(), AppError> {
        Err(unavailable())
    }
}

#[async_trait]
impl ArticleRepository for FailingRepository {
    async fn get(&self, _slug: &str) -> Result<Option<Article>, AppError> {
        Err(unavailable())
    }
    async fn list(&self, _kind: Option<ArticleKind>) -> Result<Vec<Article>, AppError> {
        Err(unavailable())
    }
    async fn create(&self, _article: Article) -> Result<(), AppError> {
        Err(unavailable())
    }
    async fn update(&self, _article: Article) -> Result<(), AppError> {
        Err(unavailable())
    }
    async fn delete(&self, _slug: &str) -> Result<(), AppError> {
        Err(unavailable())
    }
}

/// Build a permissive `TestServer` whose stores are all unreachable.
pub fn server_with_failing_store() -> axum_test::TestServer {
    let router = router_with(Arc::new(FailingRepository), Arc::new(FailingRepository));

    axum_test::TestServer::builder()
        .build(router)
}
