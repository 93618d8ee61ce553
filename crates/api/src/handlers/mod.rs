pub mod dashboard;
pub mod datasets;
pub mod pages;
