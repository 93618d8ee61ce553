use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard HTML routes mounted at the root.
///
/// ```text
/// GET /  -> show_dashboard (?menu=, ?dataset=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard::show_dashboard))
}
