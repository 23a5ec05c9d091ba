use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "libdev.toml";
pub const ENV_PREFIX: &str = "LIBDEV";

/// Where the mutable stores (language reference, articles) live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Mongodb,
}

/// Application configuration.
///
/// Layered, lowest priority first: built-in defaults, the config file,
/// `LIBDEV_*` environment variables (e.g. `LIBDEV_STORAGE=mongodb`).
#[derive(Clone, Deserialize)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    /// Optional JSON/YAML catalog replacing the bundled one.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Load the configuration, reading `file` if given, else `libdev.toml` if present.
    pub fn load(file: Option<&Path>) -> Result<Self, AppError> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Self::build(
            config::Config::builder()
                .add_source(file_source)
                .add_source(
                    config::Environment::with_prefix(ENV_PREFIX)
                        .try_parsing(true),
                ),
        )
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let settings = builder
            .set_default("storage", "memory")
            .and_then(|b| b.set_default("mongodb_uri", "mongodb://localhost:27017"))
            .and_then(|b| b.set_default("mongodb_database", "libdev"))
            .and_then(|b| b.set_default("seed_demo_data", true))
            .and_then(|b| b.build())
            .map_err(|e| AppError::Internal(format!("Invalid configuration: {e}")))?;

        settings
            .try_deserialize()
            .map_err(|e| AppError::Internal(format!("Invalid configuration: {e}")))
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("storage", &self.storage)
            .field("mongodb_uri", &redact_uri(&self.mongodb_uri))
            .field("mongodb_database", &self.mongodb_database)
            .field("catalog_path", &self.catalog_path)
            .field("seed_demo_data", &self.seed_demo_data)
            .finish()
    }
}

/// Hide the credentials of a connection string, keeping scheme, hosts and options.
///
/// `mongodb://user:pw@db:27017/?tls=true` becomes `mongodb://***@db:27017/?tls=true`.
pub fn redact_uri(uri: &str) -> String {
    let Some(scheme_end) = uri.find("://").map(|i| i + 3) else {
        return uri.to_string();
    };
    let rest = &uri[scheme_end..];
    let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}***{}", &uri[..scheme_end], &rest[at..]),
        None => uri.to_string(),
    }
}
