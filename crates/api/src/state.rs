use std::sync::Arc;

use springfield_core::DatasetContext;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the datasets are loaded once and only ever read.
#[derive(Clone)]
pub struct AppState {
    pub datasets: Arc<DatasetContext>,
    pub config: Arc<ServerConfig>,
}
