//! Domain crate for the Springfield dashboard.
//!
//! Loads the dataset files, keeps them in a read-only [`DatasetContext`] and
//! builds page content from it. No web dependencies live here.

pub mod csv;
pub mod datasets;
pub mod download;
pub mod error;
pub mod narrative;
pub mod pages;
pub mod records;
pub mod table;
pub mod types;

pub use datasets::{DatasetContext, DatasetKind, TableSource};
pub use error::CoreError;
pub use pages::{render, Block, DatasetSelection, Page, RenderOptions, RenderedPage};
pub use table::Table;
