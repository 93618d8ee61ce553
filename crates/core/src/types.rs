/// Identifier of a character or episode, as written by the offline pipeline.
pub type RecordId = i64;
