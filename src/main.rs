mod catalog;
mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod services;

use axum::{
    routing::{get, post},
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn,
};
use tower_http::{
    services::ServeDir,
    limit::RequestBodyLimitLayer,
};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tower_sessions::cookie::SameSite;
use crate::{
    services::CatalogService,
    config::Config,
};
use tracing_subscriber;

#[tokio::main]
async fn main() {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");
    let config_state = config.clone();

    // Ensure the data and assets directories exist (idempotent)
    std::fs::create_dir_all(&config.storage.data_dir)
        .expect("Failed to create data directory");
    std::fs::create_dir_all(&config.storage.assets_dir)
        .expect("Failed to create assets directory");

    // Initialize the disk-backed catalog store
    let catalog_service = CatalogService::new(&config.storage.data_dir, &config.storage.catalog_file);

    // Session store setup
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_name("session");

    // Create router with all routes
    let app = Router::new()
        // Auth routes
        .route("/", get(handlers::serve_login_page))
        .route("/login", post(handlers::handle_login))
        .route("/logout", get(handlers::handle_logout))

        // Inventory routes
        .route("/inventory", get(handlers::serve_inventory_page))
        .route("/import", post(handlers::process_import))

        // Editor routes
        .route("/edit/cancel", get(handlers::cancel_edit))
        .route("/edit/:id", get(handlers::serve_edit_page))
        .route("/edit", post(handlers::handle_edit))

        // Static assets (logo)
        .nest_service("/assets", ServeDir::new(&config.storage.assets_dir))

        // Add middleware
        .layer(from_fn(middleware::require_auth))
        .layer(session_layer)

        // File upload limits from config
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.upload.max_file_size))

        // Add state
        .with_state((catalog_service, config_state));

    tracing::info!("Server running on {}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(
        format!("{}:{}", config.server.host, config.server.port)
    )
    .await
    .expect("Failed to bind server");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}
