use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::document::Command;

/// One language of the editable language reference.
///
/// Stored in the `languages` collection, keyed by `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Lower-cased, trimmed language name (e.g. `python`).
    pub name: String,
    /// Link to, or summary of, the official documentation.
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl LanguageEntry {
    /// Canonical form of a language name used as the storage key.
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }
}

/// Kind of long-form write-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleKind {
    Framework,
    Tutorial,
    Project,
}

impl fmt::Display for ArticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleKind::Framework => write!(f, "framework"),
            ArticleKind::Tutorial => write!(f, "tutorial"),
            ArticleKind::Project => write!(f, "project"),
        }
    }
}

impl ArticleKind {
    /// Parse an article kind from a string (case-insensitive).
    pub fn from_str_ci(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "framework" => Some(ArticleKind::Framework),
            "tutorial" => Some(ArticleKind::Tutorial),
            "project" => Some(ArticleKind::Project),
            _ => None,
        }
    }
}

/// A framework, tutorial, or project write-up stored in the `articles` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Uuid,
    /// URL-safe identifier (e.g. `axum-rest-api`).
    pub slug: String,
    pub kind: ArticleKind,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Raw Markdown body.
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a language entry.
///
/// Fields are optional so that missing ones can be reported together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLanguageRequest {
    pub name: Option<String>,
    pub documentation: Option<String>,
    #[serde(default)]
    pub commands: Vec<Command>,
}

/// Request payload for updating a language entry. At least one field is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLanguageRequest {
    pub documentation: Option<String>,
    pub commands: Option<Vec<Command>>,
}

/// Request payload for creating an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateArticleRequest {
    pub slug: Option<String>,
    pub kind: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub summary: String,
    pub body: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request payload for updating an article. Absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArticleRequest {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// An article with its Markdown body rendered to sanitized HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedArticle {
    #[serde(flatten)]
    pub article: Article,
    pub html: String,
}

/// Generic acknowledgement returned by write endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_serialization() {
        let now = Utc::now();
        let article = Article {
            id: Uuid::nil(),
            slug: "axum-rest-api".to_string(),
            kind: ArticleKind::Tutorial,
            title: "Build a REST API with Axum".to_string(),
            summary: "From zero to CRUD".to_string(),
            body: "# Axum\n\nHello".to_string(),
            tags: vec!["rust".to_string(), "web".to_string()],
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["kind"], "tutorial");
        assert!(json.get("createdAt").is_some());

        let deserialized: Article = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, article);
    }

    #[test]
    fn test_article_kind_from_str_ci() {
        assert_eq!(ArticleKind::from_str_ci("Tutorial"), Some(ArticleKind::Tutorial));
        assert_eq!(ArticleKind::from_str_ci("FRAMEWORK"), Some(ArticleKind::Framework));
        assert_eq!(ArticleKind::from_str_ci(" project "), Some(ArticleKind::Project));
        assert_eq!(ArticleKind::from_str_ci("blog"), None);
    }

    #[test]
    fn test_article_kind_display() {
        assert_eq!(ArticleKind::Framework.to_string(), "framework");
        assert_eq!(ArticleKind::Project.to_string(), "project");
    }

    #[test]
    fn test_language_entry_defaults() {
        let entry: LanguageEntry = serde_json::from_str(r#"{ "name": "go" }"#).unwrap();
        assert!(entry.documentation.is_empty());
        assert!(entry.commands.is_empty());
    }

    #[test]
    fn test_create_language_request_missing_fields() {
        let req: CreateLanguageRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
        assert!(req.documentation.is_none());
        assert!(req.commands.is_empty());
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(LanguageEntry::normalize_name("  Rust "), "rust");
    }
}
