use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // One-time application bootstrap; concurrent callers converge on the
    // same ready instance
    let state = AppState::get_or_init(config).await?;

    info!(
        "Successfully connected to MongoDB database: {}",
        state.config.mongodb.database()
    );

    // Initialize indexes (unique shortId/publicId/key/code constraints)
    api::init_indexes(&state.db).await?;

    // Build router with API routes
    let api_routes = api::routes(state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge liveness endpoint
    let app = router.merge(health_router(state.config.app));

    info!("Starting content API with production-ready shutdown (30s timeout)");

    let mongo_client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            // MongoDB client closes automatically on drop
            drop(mongo_client);
            info!("MongoDB connection handle released");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Content API shutdown complete");
    Ok(())
}
