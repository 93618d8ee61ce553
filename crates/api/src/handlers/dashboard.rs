//! The interactive dashboard: one HTML page per sidebar selection.

use axum::extract::{Query, State};
use axum::response::Html;
use springfield_core::{render, Page};

use crate::error::{AppError, AppResult};
use crate::html;
use crate::query::DashboardParams;
use crate::state::AppState;

/// GET /?menu=<page>&dataset=<dataset>
///
/// Render the selected page. With no `menu` the Introduction page is shown.
/// `dataset` is only accepted together with the Data page.
pub async fn show_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> AppResult<Html<String>> {
    let page = params
        .menu
        .as_deref()
        .map(Page::from_label)
        .transpose()?
        .unwrap_or_default();

    let given = params.dataset.as_deref().filter(|d| !d.trim().is_empty());
    if given.is_some() && page != Page::Data {
        return Err(AppError::BadRequest(format!(
            "dataset selection only applies to the Data page, not {page}"
        )));
    }
    let dataset = super::pages::dataset_selection(given)?;

    let options = super::pages::render_options(&state, dataset);
    let rendered = render(page, state.datasets.as_ref(), &options)?;

    tracing::debug!(page = %page, dataset = dataset.label(), "Dashboard rendered");

    Ok(Html(html::document(&rendered, dataset)))
}
