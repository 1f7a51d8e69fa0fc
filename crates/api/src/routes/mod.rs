pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree: the portfolio pages plus the unlisted
/// health check.
pub fn site_routes() -> Router<AppState> {
    Router::new().merge(health::router()).merge(pages::router())
}
