use axum::extract::State;
use axum::Json;
use springfield_core::datasets::DatasetSummary;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/datasets
///
/// Shape and row count of each loaded dataset.
pub async fn list_datasets(State(state): State<AppState>) -> Json<DataResponse<Vec<DatasetSummary>>> {
    Json(DataResponse {
        data: state.datasets.summaries(),
    })
}
