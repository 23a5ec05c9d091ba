//! The load-once, read-only catalog shared by every request.

pub mod loader;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::document::{Document, Library, NamedCommand};

/// Immutable collection of documents, named commands, and registered libraries.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub commands: Vec<NamedCommand>,
    #[serde(default)]
    pub libraries: Vec<Library>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate document or library ids.
    pub fn new(
        documents: Vec<Document>,
        commands: Vec<NamedCommand>,
        libraries: Vec<Library>,
    ) -> Result<Self, AppError> {
        let catalog = Self {
            documents,
            commands,
            libraries,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub(crate) fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for doc in &self.documents {
            if doc.id.trim().is_empty() {
                return Err(AppError::Catalog("Document with empty id".into()));
            }
            if !seen.insert(doc.id.as_str()) {
                return Err(AppError::Catalog(format!(
                    "Duplicate document id '{}'",
                    doc.id
                )));
            }
        }

        let mut seen = HashSet::new();
        for lib in &self.libraries {
            if !seen.insert(lib.id.as_str()) {
                return Err(AppError::Catalog(format!(
                    "Duplicate library id '{}'",
                    lib.id
                )));
            }
        }

        Ok(())
    }

    pub fn find_document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn find_library(&self, id: &str) -> Option<&Library> {
        self.libraries.iter().find(|l| l.id == id)
    }
}
