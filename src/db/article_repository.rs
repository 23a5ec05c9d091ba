use std::sync::RwLock;

use async_trait::async_trait;

use crate::db::models::{Article, ArticleKind};
#[cfg(feature = "ssr")]
use crate::db::repository::{ensure_unique_index, is_duplicate_key};
use crate::error::AppError;

/// Repository trait for framework, tutorial, and project write-ups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Find an article by its slug.
    async fn get(&self, slug: &str) -> Result<Option<Article>, AppError>;

    /// List articles, newest first, optionally restricted to one kind.
    async fn list(&self, kind: Option<ArticleKind>) -> Result<Vec<Article>, AppError>;

    /// Insert a new article. Fails with `BadRequest` if the slug is taken.
    async fn create(&self, article: Article) -> Result<(), AppError>;

    /// Replace an existing article (matched by slug).
    async fn update(&self, article: Article) -> Result<(), AppError>;

    /// Delete an article by slug.
    async fn delete(&self, slug: &str) -> Result<(), AppError>;
}

/// Process-local implementation; keeps insertion order.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> AppError {
    AppError::Internal("article store lock poisoned".into())
}

fn newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn get(&self, slug: &str) -> Result<Option<Article>, AppError> {
        Ok(self
            .articles
            .read()
            .map_err(|_| poisoned())?
            .iter()
            .find(|a| a.slug == slug)
            .cloned())
    }

    async fn list(&self, kind: Option<ArticleKind>) -> Result<Vec<Article>, AppError> {
        let mut articles: Vec<Article> = self
            .articles
            .read()
            .map_err(|_| poisoned())?
            .iter()
            .filter(|a| kind.map_or(true, |k| a.kind == k))
            .cloned()
            .collect();
        newest_first(&mut articles);
        Ok(articles)
    }

    async fn create(&self, article: Article) -> Result<(), AppError> {
        let mut articles = self.articles.write().map_err(|_| poisoned())?;
        if articles.iter().any(|a| a.slug == article.slug) {
            return Err(AppError::BadRequest(format!(
                "Article '{}' already exists",
                article.slug
            )));
        }
        articles.push(article);
        Ok(())
    }

    async fn update(&self, article: Article) -> Result<(), AppError> {
        let mut articles = self.articles.write().map_err(|_| poisoned())?;
        let Some(existing) = articles.iter_mut().find(|a| a.slug == article.slug) else {
            return Err(AppError::NotFound(format!(
                "Article '{}' not found",
                article.slug
            )));
        };
        *existing = article;
        Ok(())
    }

    async fn delete(&self, slug: &str) -> Result<(), AppError> {
        let mut articles = self.articles.write().map_err(|_| poisoned())?;
        let before = articles.len();
        articles.retain(|a| a.slug != slug);
        if articles.len() == before {
            return Err(AppError::NotFound(format!("Article '{}' not found", slug)));
        }
        Ok(())
    }
}

/// MongoDB implementation of the ArticleRepository.
#[cfg(feature = "ssr")]
pub struct MongoArticleRepository {
    collection: mongodb::Collection<Article>,
}

#[cfg(feature = "ssr")]
impl MongoArticleRepository {
    /// Open the `articles` collection, making sure slugs are unique.
    pub async fn new(db: &mongodb::Database) -> Result<Self, AppError> {
        let collection = db.collection("articles");
        ensure_unique_index(&collection, "slug").await?;
        Ok(Self { collection })
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl ArticleRepository for MongoArticleRepository {
    async fn get(&self, slug: &str) -> Result<Option<Article>, AppError> {
        use mongodb::bson::doc;

        self.collection
            .find_one(doc! { "slug": slug })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn list(&self, kind: Option<ArticleKind>) -> Result<Vec<Article>, AppError> {
        use mongodb::bson::doc;
        use mongodb::options::FindOptions;

        let filter = match kind {
            Some(kind) => doc! { "kind": kind.to_string() },
            None => doc! {},
        };

        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();

        let mut cursor = self
            .collection
            .find(filter)
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let mut articles = Vec::new();
        use futures::TryStreamExt;
        while let Some(article) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            articles.push(article);
        }

        Ok(articles)
    }

    async fn create(&self, article: Article) -> Result<(), AppError> {
        match self.collection.insert_one(&article).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(AppError::BadRequest(format!(
                "Article '{}' already exists",
                article.slug
            ))),
            Err(e) => Err(AppError::Database(e.to_string())),
        }
    }

    async fn update(&self, article: Article) -> Result<(), AppError> {
        use mongodb::bson::doc;

        let result = self
            .collection
            .replace_one(doc! { "slug": &article.slug }, &article)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Article '{}' not found",
                article.slug
            )));
        }

        Ok(())
    }

    async fn delete(&self, slug: &str) -> Result<(), AppError> {
        use mongodb::bson::doc;

        let result = self
            .collection
            .delete_one(doc! { "slug": slug })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Article '{}' not found", slug)));
        }

        Ok(())
    }
}
