//! Query parameter types for the dashboard handlers.

use serde::Deserialize;

/// Sidebar selections (`?menu=&dataset=`).
///
/// Labels are parsed case-insensitively; a missing `menu` selects the
/// Introduction page and a missing `dataset` selects every dataset.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub menu: Option<String>,
    pub dataset: Option<String>,
}

/// Dataset selection for the JSON page endpoint (`?dataset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub dataset: Option<String>,
}
