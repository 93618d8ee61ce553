use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page content routes mounted at `/pages`.
///
/// ```text
/// GET /         -> list_pages
/// GET /{page}   -> get_page (?dataset=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list_pages))
        .route("/{page}", get(pages::get_page))
}
