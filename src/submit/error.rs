use crate::model::PayloadError;

/// Errors a submission action can settle with.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The snapshot could not be turned into a request body.
    #[error("invalid payload: {0}")]
    Payload(#[from] PayloadError),

    /// The request body could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend could not be reached or refused the request.
    #[error("server unavailable: {0}")]
    Unavailable(String),
}
