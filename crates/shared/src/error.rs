use thiserror::Error;

/// Misuse of the form record from a caller that names fields by string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("malformed assignment '{0}': expected Field=Value")]
    MalformedAssignment(String),
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("response body is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("backend reported an error: {0}")]
    Backend(String),
    #[error("response carries no prediction")]
    MissingPrediction,
}
