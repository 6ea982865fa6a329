use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use product_service::{
    build_app,
    config::load_config,
    infrastructure::{DatabaseManager, Logger},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;
    let _log_guard = Logger::init(&config.logging)?;

    info!("Starting product service...");

    let database = DatabaseManager::connect(&config.database)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {}", e);
            e
        })?;

    if config.database.init_schema {
        database.ensure_schema().await?;
    }
    database
        .seed_categories(&config.database.seed_categories)
        .await?;

    let state = AppState::from_pool(database.get_pool().clone());
    let app = build_app(state, &config.server);

    let listener =
        TcpListener::bind((config.server.bind_address.as_str(), config.server.port)).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Product service running on http://{}", addr);
    info!("   GET    /products          - List products with category names");
    info!("   POST   /products          - Create product");
    info!("   GET    /products/:id      - Get product");
    info!("   PUT    /products/:id      - Update product");
    info!("   DELETE /products/:id      - Delete product");
    info!("   GET    /categories        - List categories");
    info!("   GET    /categories/:id    - Get category");
    info!("   GET    /health            - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Product service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
