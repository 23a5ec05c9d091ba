use chrono::{Duration, Utc};
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mongo::Mongo;
use uuid::Uuid;

use libdev::db::article_repository::{ArticleRepository, MongoArticleRepository};
use libdev::db::models::{Article, ArticleKind, LanguageEntry};
use libdev::db::repository::{LanguageRepository, MongoLanguageRepository};
use libdev::error::AppError;
use libdev::models::document::Command;

/// Start a MongoDB container and return it with a fresh database handle.
async fn start_mongo() -> (ContainerAsync<Mongo>, mongodb::Database) {
    let container = Mongo::default()
        .start()
        .await
        .expect("Failed to start MongoDB container");
    let port = container
        .get_host_port_ipv4(27017)
        .await
        .expect("Failed to get MongoDB port");
    let client = mongodb::Client::with_uri_str(format!("mongodb://127.0.0.1:{}", port))
        .await
        .expect("Failed to connect to MongoDB");
    (container, client.database("libdev_test"))
}

fn language(name: &str) -> LanguageEntry {
    LanguageEntry {
        name: name.to_string(),
        documentation: format!("https://{name}.example/docs"),
        commands: vec![Command {
            syntax: format!("{name} --help"),
            description: "Show help".to_string(),
        }],
    }
}

fn article(slug: &str, kind: ArticleKind, age_minutes: i64) -> Article {
    let created = Utc::now() - Duration::minutes(age_minutes);
    Article {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        kind,
        title: slug.to_uppercase(),
        summary: String::new(),
        body: "body".to_string(),
        tags: vec![],
        created_at: created,
        updated_at: created,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn mongo_language_crud() {
    let (_container, db) = start_mongo().await;
    let repo = MongoLanguageRepository::new(&db)
        .await
        .expect("Failed to prepare languages collection");

    repo.create(language("rust")).await.unwrap();
    repo.create(language("go")).await.unwrap();
    assert!(matches!(
        repo.create(language("rust")).await,
        Err(AppError::BadRequest(_))
    ));

    let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["go", "rust"]);

    let mut updated = language("rust");
    updated.documentation = "https://doc.rust-lang.org".to_string();
    repo.update(updated).await.unwrap();
    assert_eq!(
        repo.get("rust").await.unwrap().unwrap().documentation,
        "https://doc.rust-lang.org"
    );

    repo.delete("go").await.unwrap();
    assert!(repo.get("go").await.unwrap().is_none());
    assert!(matches!(repo.delete("go").await, Err(AppError::NotFound(_))));
    assert!(matches!(
        repo.update(language("cobol")).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn mongo_article_list_is_newest_first_and_filtered() {
    let (_container, db) = start_mongo().await;
    let repo = MongoArticleRepository::new(&db)
        .await
        .expect("Failed to prepare articles collection");

    repo.create(article("old", ArticleKind::Tutorial, 30)).await.unwrap();
    repo.create(article("new", ArticleKind::Tutorial, 1)).await.unwrap();
    repo.create(article("app", ArticleKind::Project, 10)).await.unwrap();

    let slugs: Vec<String> = repo
        .list(None)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.slug)
        .collect();
    assert_eq!(slugs, vec!["new", "app", "old"]);

    let tutorials = repo.list(Some(ArticleKind::Tutorial)).await.unwrap();
    assert_eq!(tutorials.len(), 2);

    let fetched = repo.get("app").await.unwrap().unwrap();
    assert_eq!(fetched.kind, ArticleKind::Project);

    repo.delete("app").await.unwrap();
    assert!(repo.get("app").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn mongo_concurrent_language_creates_insert_once() {
    let (_container, db) = start_mongo().await;
    let repo = MongoLanguageRepository::new(&db)
        .await
        .expect("Failed to prepare languages collection");

    let (first, second) = tokio::join!(repo.create(language("zig")), repo.create(language("zig")));

    let outcomes = [first, second];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(outcomes
        .iter()
        .any(|r| matches!(r, Err(AppError::BadRequest(_)))));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn mongo_concurrent_article_creates_insert_once() {
    let (_container, db) = start_mongo().await;
    let repo = MongoArticleRepository::new(&db)
        .await
        .expect("Failed to prepare articles collection");

    let (first, second) = tokio::join!(
        repo.create(article("intro", ArticleKind::Tutorial, 0)),
        repo.create(article("intro", ArticleKind::Project, 0))
    );

    let outcomes = [first, second];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(outcomes
        .iter()
        .any(|r| matches!(r, Err(AppError::BadRequest(_)))));
    assert_eq!(repo.list(None).await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn mongo_reopening_repository_keeps_index() {
    let (_container, db) = start_mongo().await;
    MongoLanguageRepository::new(&db)
        .await
        .expect("Failed to prepare languages collection");
    let repo = MongoLanguageRepository::new(&db)
        .await
        .expect("Index creation must be idempotent");

    repo.create(language("rust")).await.unwrap();
    assert!(matches!(
        repo.create(language("rust")).await,
        Err(AppError::BadRequest(_))
    ));
}
