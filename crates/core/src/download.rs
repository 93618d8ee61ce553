//! Self-contained download links: the file content travels inside the link
//! as a base64 data URI, so the browser saves it without a server round trip.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::table::Table;

/// Media type used for CSV downloads.
pub const CSV_MEDIA_TYPE: &str = "file/csv";

/// A rendered download affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    /// Link text, e.g. `Download Episodes Dataset`.
    pub label: String,
    /// Suggested file name for the saved file.
    pub file_name: String,
    /// `data:` URI carrying the file content.
    pub href: String,
}

/// Encode `bytes` as `data:<media_type>;base64,<payload>`.
pub fn encode_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

/// Split a base64 data URI back into its media type and decoded bytes.
///
/// The server only encodes; this is the inverse used to check that a
/// download holds the table it names.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), CoreError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| CoreError::Decode("missing 'data:' scheme".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| CoreError::Decode("missing ',' before payload".into()))?;
    let media_type = meta
        .strip_suffix(";base64")
        .ok_or_else(|| CoreError::Decode("only base64 data URIs are supported".into()))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| CoreError::Decode(format!("invalid base64 payload: {e}")))?;
    Ok((media_type.to_string(), bytes))
}

/// Build the download link for a full table.
///
/// `name` is the dataset's display name (`Raw`, `Episodes`, ...).
pub fn table_download(table: &Table, name: &str, file_name: &str) -> DownloadLink {
    DownloadLink {
        label: format!("Download {name} Dataset"),
        file_name: file_name.to_string(),
        href: encode_data_uri(CSV_MEDIA_TYPE, table.to_csv().as_bytes()),
    }
}
