//! Route definitions for the portfolio pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at the site root.
///
/// ```text
/// GET /               -> home
/// GET /about          -> about
/// GET /projects       -> projects listing
/// GET /projects/{id}  -> project detail (404 on unknown id)
/// GET /skills         -> skills
/// GET /contact        -> contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/projects", get(pages::projects))
        .route("/projects/{id}", get(pages::project_detail))
        .route("/skills", get(pages::skills))
        .route("/contact", get(pages::contact))
}
