use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::db::models::LanguageEntry;
use crate::error::AppError;

/// Repository trait for the editable language reference.
///
/// This trait allows swapping the storage backend and mocking it in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageRepository: Send + Sync {
    /// Find a language by its (normalized) name.
    async fn get(&self, name: &str) -> Result<Option<LanguageEntry>, AppError>;

    /// List every language, ordered by name.
    async fn list(&self) -> Result<Vec<LanguageEntry>, AppError>;

    /// Insert a new language. Fails with `BadRequest` if the name is taken.
    async fn create(&self, entry: LanguageEntry) -> Result<(), AppError>;

    /// Replace an existing language. Fails with `NotFound` if it does not exist.
    async fn update(&self, entry: LanguageEntry) -> Result<(), AppError>;

    /// Delete a language. Fails with `NotFound` if it does not exist.
    async fn delete(&self, name: &str) -> Result<(), AppError>;
}

/// Process-local implementation backed by a locked map.
#[derive(Default)]
pub struct InMemoryLanguageRepository {
    entries: RwLock<BTreeMap<String, LanguageEntry>>,
}

impl InMemoryLanguageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> AppError {
    AppError::Internal("language store lock poisoned".into())
}

#[async_trait]
impl LanguageRepository for InMemoryLanguageRepository {
    async fn get(&self, name: &str) -> Result<Option<LanguageEntry>, AppError> {
        Ok(self.entries.read().map_err(|_| poisoned())?.get(name).cloned())
    }

    async fn list(&self) -> Result<Vec<LanguageEntry>, AppError> {
        Ok(self
            .entries
            .read()
            .map_err(|_| poisoned())?
            .values()
            .cloned()
            .collect())
    }

    async fn create(&self, entry: LanguageEntry) -> Result<(), AppError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        if entries.contains_key(&entry.name) {
            return Err(AppError::BadRequest(format!(
                "Language '{}' already exists",
                entry.name
            )));
        }
        entries.insert(entry.name.clone(), entry);
        Ok(())
    }

    async fn update(&self, entry: LanguageEntry) -> Result<(), AppError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        match entries.get_mut(&entry.name) {
            Some(existing) => {
                *existing = entry;
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "Language '{}' not found",
                entry.name
            ))),
        }
    }

    async fn delete(&self, name: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Language '{}' not found", name)))
    }
}

/// MongoDB implementation of the LanguageRepository.
///
/// This is only available when the `ssr` feature is enabled (i.e., server-side).
#[cfg(feature = "ssr")]
pub struct MongoLanguageRepository {
    collection: mongodb::Collection<LanguageEntry>,
}

/// MongoDB server error code for a unique-index violation.
#[cfg(feature = "ssr")]
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Whether a MongoDB error is a unique-index violation on insert.
#[cfg(feature = "ssr")]
pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// Create a unique ascending index on `field` if it does not exist yet.
#[cfg(feature = "ssr")]
pub(crate) async fn ensure_unique_index<T: Send + Sync>(
    collection: &mongodb::Collection<T>,
    field: &str,
) -> Result<(), AppError> {
    use mongodb::bson::Document;
    use mongodb::options::IndexOptions;
    use mongodb::IndexModel;

    let mut keys = Document::new();
    keys.insert(field, 1);

    let index = IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build();

    collection
        .create_index(index)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(())
}

#[cfg(feature = "ssr")]
impl MongoLanguageRepository {
    /// Open the `languages` collection, making sure names are unique.
    pub async fn new(db: &mongodb::Database) -> Result<Self, AppError> {
        let collection = db.collection("languages");
        ensure_unique_index(&collection, "name").await?;
        Ok(Self { collection })
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl LanguageRepository for MongoLanguageRepository {
    async fn get(&self, name: &str) -> Result<Option<LanguageEntry>, AppError> {
        use mongodb::bson::doc;

        self.collection
            .find_one(doc! { "name": name })
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn list(&self) -> Result<Vec<LanguageEntry>, AppError> {
        use mongodb::bson::doc;
        use mongodb::options::FindOptions;

        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();

        let mut cursor = self
            .collection
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let mut entries = Vec::new();
        use futures::TryStreamExt;
        while let Some(entry) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            entries.push(entry);
        }

        Ok(entries)
    }

    async fn create(&self, entry: LanguageEntry) -> Result<(), AppError> {
        match self.collection.insert_one(&entry).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(AppError::BadRequest(format!(
                "Language '{}' already exists",
                entry.name
            ))),
            Err(e) => Err(AppError::Database(e.to_string())),
        }
    }

    async fn update(&self, entry: LanguageEntry) -> Result<(), AppError> {
        use mongodb::bson::doc;

        let result = self
            .collection
            .replace_one(doc! { "name": &entry.name }, &entry)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Language '{}' not found",
                entry.name
            )));
        }

        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), AppError> {
        use mongodb::bson::doc;

        let result = self
            .collection
            .delete_one(doc! { "name": name })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Language '{}' not found", name)));
        }

        Ok(())
    }
}
