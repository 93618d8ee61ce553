use serde::Serialize;

/// Body of every successful JSON endpoint: `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
