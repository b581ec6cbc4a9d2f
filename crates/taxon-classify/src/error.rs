//! Classification error types for taxon-classify.

/// Errors from converting raw JSON into a subtopic.
///
/// Classification itself is infallible; only decoding the input can fail.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// The input text is not valid JSON.
    #[error("invalid JSON format: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The JSON parsed but is not a metadata object.
    #[error("error processing metadata: {0}")]
    InvalidRecord(#[source] serde_json::Error),
}
