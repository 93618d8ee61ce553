pub mod dashboard;
pub mod datasets;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pages                 menu labels
/// /pages/{page}          content blocks of one page
/// /datasets              loaded dataset summaries
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pages", pages::router())
        .nest("/datasets", datasets::router())
}
