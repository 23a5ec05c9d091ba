#[cfg(feature = "ssr")]
#[derive(clap::Parser, Debug)]
#[command(name = "libdev", about = "LibDev developer reference server")]
struct Cli {
    /// Path to a TOML/YAML/JSON config file (defaults to ./libdev.toml if present).
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use clap::Parser;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use libdev::api::routes::api_routes;
    use libdev::app::{shell, App};
    use libdev::catalog::loader;
    use libdev::config::{redact_uri, AppConfig, StorageBackend};
    use libdev::db::article_repository::{
        ArticleRepository, InMemoryArticleRepository, MongoArticleRepository,
    };
    use libdev::db::repository::{
        InMemoryLanguageRepository, LanguageRepository, MongoLanguageRepository,
    };
    use libdev::state::AppState;
    use std::sync::Arc;
    use tower::ServiceBuilder;
    use tower_http::cors::CorsLayer;
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "libdev=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting LibDev server...");

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None).context("Failed to read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();

    let catalog = match &config.catalog_path {
        Some(path) => loader::load_from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => loader::load_bundled().context("Bundled catalog is invalid")?,
    };
    tracing::info!(
        documents = catalog.documents.len(),
        libraries = catalog.libraries.len(),
        commands = catalog.commands.len(),
        "Catalog loaded"
    );

    let (language_repo, article_repo): (Arc<dyn LanguageRepository>, Arc<dyn ArticleRepository>) =
        match config.storage {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                (
                    Arc::new(InMemoryLanguageRepository::new()),
                    Arc::new(InMemoryArticleRepository::new()),
                )
            }
            StorageBackend::Mongodb => {
                let mongo_client = mongodb::Client::with_uri_str(&config.mongodb_uri)
                    .await
                    .context("Failed to connect to MongoDB")?;
                let mongo_db = mongo_client.database(&config.mongodb_database);
                tracing::info!("Connected to MongoDB at {}", redact_uri(&config.mongodb_uri));
                (
                    Arc::new(
                        MongoLanguageRepository::new(&mongo_db)
                            .await
                            .context("Failed to prepare the languages collection")?,
                    ),
                    Arc::new(
                        MongoArticleRepository::new(&mongo_db)
                            .await
                            .context("Failed to prepare the articles collection")?,
                    ),
                )
            }
        };

    if config.seed_demo_data {
        libdev::demo_seeder::seed_demo_data(language_repo.as_ref(), article_repo.as_ref()).await;
    }

    // Build application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        language_repo,
        article_repo,
        leptos_options: leptos_options.clone(),
    };

    // Generate the Leptos route list for SSR
    let routes = generate_route_list(App);

    let app = Router::new()
        .merge(api_routes())
        // Leptos SSR routes; server functions read AppState from context
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let state = app_state.clone();
                move || provide_context(state.clone())
            },
            {
                let options = leptos_options.clone();
                move || shell(options.clone())
            },
        )
        .fallback_service(ServeDir::new(&site_root))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state);

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(feature = "ssr")]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

// When compiled for WASM (client-side), there's no main function.
// The hydrate() function in lib.rs handles client-side initialization.
#[cfg(not(feature = "ssr"))]
fn main() {}
