use chrono::Utc;
use uuid::Uuid;

use crate::catalog::loader::bundled_languages;
use crate::db::article_repository::ArticleRepository;
use crate::db::models::{Article, ArticleKind};
use crate::db::repository::LanguageRepository;

/// Insert the bundled language reference and write-ups into empty stores.
///
/// Existing entries are left untouched; a failure on one item is logged and
/// seeding continues with the next.
pub async fn seed_demo_data(languages: &dyn LanguageRepository, articles: &dyn ArticleRepository) {
    tracing::info!("Starting demo data seeding...");

    match bundled_languages() {
        Ok(entries) => {
            for entry in entries {
                let name = entry.name.clone();
                match languages.get(&name).await {
                    Ok(Some(_)) => {
                        tracing::info!("Language '{}' already exists, skipping.", name);
                        continue;
                    }
                    Err(e) => {
                        tracing::error!("Failed to check for existing language '{}': {}", name, e);
                        continue;
                    }
                    Ok(None) => {}
                }

                match languages.create(entry).await {
                    Ok(()) => tracing::info!("Inserted language '{}'.", name),
                    Err(e) => tracing::error!("Failed to insert language '{}': {}", name, e),
                }
            }
        }
        Err(e) => tracing::error!("Bundled language data is unusable: {}", e),
    }

    // Using include_str! to embed demo content directly into the binary
    let demo_articles = vec![
        (
            "axum-rest-api",
            ArticleKind::Tutorial,
            "Build a REST API with Axum",
            "Routing, extractors and JSON errors in a small service.",
            include_str!("../data/articles/axum_rest_api.md"),
            vec!["rust", "web", "axum"],
        ),
        (
            "leptos",
            ArticleKind::Framework,
            "Leptos at a glance",
            "Fine-grained reactive UI with server-side rendering.",
            include_str!("../data/articles/leptos.md"),
            vec!["rust", "web", "ssr"],
        ),
        (
            "cli-todo",
            ArticleKind::Project,
            "Project: a command-line todo list",
            "A weekend project covering argument parsing and persistence.",
            include_str!("../data/articles/cli_todo.md"),
            vec!["rust", "cli"],
        ),
    ];

    for (slug, kind, title, summary, body, tags) in demo_articles {
        match articles.get(slug).await {
            Ok(Some(_)) => {
                tracing::info!("Article '{}' already exists, skipping.", slug);
                continue;
            }
            Err(e) => {
                tracing::error!("Failed to check for existing article '{}': {}", slug, e);
                continue;
            }
            Ok(None) => {}
        }

        let now = Utc::now();
        let article = Article {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            kind,
            title: title.to_string(),
            summary: summary.to_string(),
            body: body.to_string(),
            tags: tags.into_iter().map(String::from).collect(),
            created_at: now,
            updated_at: now,
        };

        match articles.create(article).await {
            Ok(()) => tracing::info!("Inserted article '{}'.", slug),
            Err(e) => tracing::error!("Failed to insert article '{}': {}", slug, e),
        }
    }

    tracing::info!("Demo data seeding completed.");
}
