//! API endpoints.

mod auth;
mod campaigns;
mod categories;
mod info;
mod products;
mod sub_categories;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/category", categories::router())
        .nest("/subcategory", sub_categories::router())
        .nest("/product", products::router())
        .nest("/campaign", campaigns::router())
        .nest("/info", info::router())
}
