use std::collections::BTreeMap;
use std::path::Path;

use crate::catalog::Catalog;
use crate::db::models::LanguageEntry;
use crate::error::AppError;
use crate::models::document::Command;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");
const BUNDLED_LANGUAGES: &str = include_str!("../../data/languages.json");

/// Load the catalog compiled into the binary.
pub fn load_bundled() -> Result<Catalog, AppError> {
    parse_json(BUNDLED_CATALOG)
}

/// Load a catalog from a JSON or YAML file (chosen by extension).
pub fn load_from_path(path: &Path) -> Result<Catalog, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::Catalog(format!("Failed to read '{}': {}", path.display(), e))
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => parse_yaml(&raw),
        _ => parse_json(&raw),
    }
}

pub fn parse_json(raw: &str) -> Result<Catalog, AppError> {
    let catalog: Catalog = serde_json::from_str(raw)
        .map_err(|e| AppError::Catalog(format!("Invalid catalog JSON: {e}")))?;
    catalog.validate()?;
    Ok(catalog)
}

pub fn parse_yaml(raw: &str) -> Result<Catalog, AppError> {
    let catalog: Catalog = serde_yaml::from_str(raw)
        .map_err(|e| AppError::Catalog(format!("Invalid catalog YAML: {e}")))?;
    catalog.validate()?;
    Ok(catalog)
}

#[derive(serde::Deserialize)]
struct BundledLanguage {
    #[serde(default)]
    commands: Vec<Command>,
    #[serde(default)]
    documentation: String,
}

/// The language reference entries used to seed an empty repository.
pub fn bundled_languages() -> Result<Vec<LanguageEntry>, AppError> {
    let raw: BTreeMap<String, BundledLanguage> = serde_json::from_str(BUNDLED_LANGUAGES)
        .map_err(|e| AppError::Catalog(format!("Invalid language data: {e}")))?;

    Ok(raw
        .into_iter()
        .map(|(name, lang)| LanguageEntry {
            name,
            documentation: lang.documentation,
            commands: lang.commands,
        })
        .collect())
}
