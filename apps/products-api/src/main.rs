//! Products API - in-memory product CRUD over REST

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{InMemoryProductRepository, ProductService};
use eyre::WrapErr;
use tracing::info;

mod api;
mod config;
mod openapi;
mod seed;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let seed = match &config.seed_file {
        Some(path) => {
            let seed = seed::load_seed(path)?;
            info!(count = seed.len(), path = %path.display(), "Loaded seed products");
            seed
        }
        None => Vec::new(),
    };

    // Initialize the application state
    let state = AppState {
        config: config.clone(),
        products: ProductService::new(InMemoryProductRepository::with_seed(seed)),
    };

    // Build REST router
    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.cors)
        .wrap_err("Invalid CORS configuration")?;
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let products = state.products.clone();
    create_production_app(
        app,
        &state.config.server,
        state.config.shutdown_timeout,
        async move {
            let discarded = products.count_products().await;
            info!(discarded, "Shutting down: discarding in-memory products");
        },
    )
    .await
    .wrap_err("Server error")?;

    info!("Products API shutdown complete");
    Ok(())
}
