use std::path::PathBuf;

use crate::csv::CsvError;
use crate::datasets::DatasetKind;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {file}: {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: CsvError,
    },

    #[error("Schema mismatch in {file}: expected columns [{}], found [{}]", .expected.join(", "), .found.join(", "))]
    Schema {
        file: &'static str,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid value '{value}' in {file}, row {row}, column '{column}': expected {expected}")]
    Field {
        file: &'static str,
        row: usize,
        column: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Dataset not available: {0}")]
    MissingDataset(DatasetKind),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Decode failed: {0}")]
    Decode(String),
}
