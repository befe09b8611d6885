//! Products API routes

use axum::Router;
use domain_products::handlers;

use crate::state::AppState;

/// Create products router backed by the shared repository
pub fn router(state: &AppState) -> Router {
    handlers::router(state.products.clone())
}
