pub mod app;
pub mod error;
pub mod catalog;
pub mod models {
    pub mod document;
    pub mod search;
}
pub mod search {
    pub mod engine;
    pub mod languages;
    pub mod library;
    pub mod query;
    pub mod rank;
    pub mod suggest;
}
pub mod rendering {
    pub mod markdown;
}
pub mod db {
    pub mod models;
    #[cfg(feature = "ssr")]
    pub mod article_repository;
    #[cfg(feature = "ssr")]
    pub mod repository;
}
pub mod components {
    pub mod article_view;
    pub mod document_view;
    pub mod search_bar;
}

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod demo_seeder;
#[cfg(feature = "ssr")]
pub mod state;
#[cfg(feature = "ssr")]
pub mod api {
    pub mod articles;
    pub mod catalog;
    pub mod errors;
    pub mod languages;
    pub mod routes;
    pub mod search;
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
