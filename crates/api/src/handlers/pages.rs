//! JSON form of the dashboard pages.

use axum::extract::{Path, Query, State};
use axum::Json;
use springfield_core::{render, CoreError, DatasetSelection, Page, RenderOptions, RenderedPage};

use crate::error::AppResult;
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Preview options derived from server configuration.
pub fn render_options(state: &AppState, dataset: DatasetSelection) -> RenderOptions {
    RenderOptions {
        preview_rows: state.config.sample_rows,
        sample_seed: state.config.sample_seed,
        dataset,
    }
}

/// Parse an optional `dataset` parameter. Absent and empty both select
/// every dataset.
pub fn dataset_selection(label: Option<&str>) -> Result<DatasetSelection, CoreError> {
    match label.map(str::trim) {
        None | Some("") => Ok(DatasetSelection::default()),
        Some(label) => DatasetSelection::from_label(label),
    }
}

/// GET /api/v1/pages
///
/// List the menu labels in sidebar order.
pub async fn list_pages() -> Json<DataResponse<Vec<&'static str>>> {
    Json(DataResponse {
        data: Page::ALL.iter().map(Page::label).collect(),
    })
}

/// GET /api/v1/pages/{page}?dataset=<dataset>
///
/// Return the content blocks of one page.
pub async fn get_page(
    State(state): State<AppState>,
    Path(label): Path<String>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<DataResponse<RenderedPage>>> {
    let page = Page::from_label(&label)?;
    let dataset = dataset_selection(params.dataset.as_deref())?;

    let rendered = render(page, state.datasets.as_ref(), &render_options(&state, dataset))?;

    Ok(Json(DataResponse { data: rendered }))
}
