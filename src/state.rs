use std::sync::Arc;

use leptos::prelude::LeptosOptions;

use crate::catalog::Catalog;
use crate::db::article_repository::ArticleRepository;
use crate::db::repository::LanguageRepository;

/// Shared application state handed to every handler and server function.
#[derive(Clone)]
pub struct AppState {
    /// Load-once, read-only catalog.
    pub catalog: Arc<Catalog>,
    pub language_repo: Arc<dyn LanguageRepository>,
    pub article_repo: Arc<dyn ArticleRepository>,
    pub leptos_options: LeptosOptions,
}

impl axum::extract::FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
