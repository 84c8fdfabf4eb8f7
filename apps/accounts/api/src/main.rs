use axum_helpers::{create_production_app, create_router, health_router, JwtAuth};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{MongoUserRepository, UserService};
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
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let mongo = database::mongodb::connect_from_config_with_retry(&config.mongo, None)
        .await
        .map_err(|e| eyre::eyre!("MongoDB connection failed: {}", e))?;
    let db = mongo.database(config.mongo.database());

    let repository = MongoUserRepository::new(&db);

    // The unique email index backs the uniqueness invariant; refuse to
    // serve without it
    repository.ensure_indexes().await?;

    let service = UserService::new(repository);

    // Seed the default admin before the listener binds, so the account
    // exists for the very first request. Best-effort by design.
    domain_users::seed::ensure_default_admin(&service).await;

    let jwt = JwtAuth::new(&config.jwt);

    let state = AppState {
        config,
        service,
        jwt,
        mongo,
    };

    // Build router with API routes (state is applied per domain router)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints into the app
    // - /health: liveness check with app name/version
    // - /ready: readiness check with an actual MongoDB ping
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready_router(state.clone()));

    info!("Starting accounts API");

    let server_config = state.config.server.clone();
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing MongoDB connection");
        // The driver disconnects when the last Client clone is dropped
        drop(state);
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Accounts API shutdown complete");
    Ok(())
}
