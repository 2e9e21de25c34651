//! HTTP API layer for menuboard.
//!
//! - **Endpoints**: categories, subcategories, products, campaigns, site info and auth
//! - **Extractors**: authentication, id paths and form bodies
//! - **Middleware**: bearer token verification and shared state
//!
//! Built on Axum 0.8.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

use axum::{Router, http::Uri};
use menuboard_common::AppError;

pub use endpoints::router;
pub use middleware::AppState;

/// Path prefix every endpoint is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Build the full API application over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(API_PREFIX, router())
        .fallback(not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ))
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Not found - {}", uri.path()))
}
