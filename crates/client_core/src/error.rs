use reqwest::StatusCode;
use shared::{FailureKind, ProtocolError};
use thiserror::Error;

/// Why a submission did not yield a prediction. Every variant renders the
/// same way on screen; the distinction only reaches the logs.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request to prediction backend failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prediction backend answered with status {0}")]
    Status(StatusCode),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl SubmitError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SubmitError::Transport(_) => FailureKind::Transport,
            SubmitError::Status(_) => FailureKind::Status,
            SubmitError::Protocol(err) => err.kind(),
        }
    }
}
