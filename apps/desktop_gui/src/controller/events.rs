//! UI/backend events and error modeling for the form controller.

use client_core::SubmitError;
use shared::{FailureKind, PredictionResult};

pub enum UiEvent {
    Info(String),
    /// A submission finished, successfully or not.
    PredictionSettled {
        ticket: u64,
        result: PredictionResult,
    },
    BackendHealth(Result<String, UiError>),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Submit,
    HealthCheck,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    /// `None` for failures outside a backend exchange, e.g. worker startup.
    kind: Option<FailureKind>,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        context: UiErrorContext,
        kind: Option<FailureKind>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            context,
            message: message.into(),
        }
    }

    pub fn from_submit(context: UiErrorContext, err: &SubmitError) -> Self {
        Self::new(context, Some(err.kind()), err.to_string())
    }

    /// One-line status text for the footer.
    pub fn status_line(&self) -> String {
        let what = match self.context {
            UiErrorContext::BackendStartup => "Worker startup failed",
            UiErrorContext::Submit => "Prediction failed",
            UiErrorContext::HealthCheck => "Backend check failed",
        };
        format!("{what} ({}): {}", err_label(self.kind), self.message)
    }
}

pub fn err_label(kind: Option<FailureKind>) -> &'static str {
    kind.map_or("Unexpected", FailureKind::label)
}

#[cfg(test)]
mod tests {
    use shared::ProtocolError;

    use super::*;

    #[test]
    fn category_comes_from_the_typed_error() {
        let err = UiError::from_submit(
            UiErrorContext::Submit,
            &SubmitError::Protocol(ProtocolError::Backend(
                "could not convert string to float".into(),
            )),
        );
        assert_eq!(err.kind, Some(FailureKind::Backend));
        assert_eq!(
            err.status_line(),
            "Prediction failed (Backend): backend reported an error: could not convert string to float"
        );
    }

    #[test]
    fn wording_does_not_change_the_category() {
        let err = UiError::from_submit(
            UiErrorContext::HealthCheck,
            &SubmitError::Protocol(ProtocolError::Backend("connection refused upstream".into())),
        );
        assert_eq!(err.kind, Some(FailureKind::Backend));
        assert!(err.status_line().starts_with("Backend check failed (Backend)"));
    }

    #[test]
    fn missing_prediction_is_a_response_problem() {
        let err = UiError::from_submit(
            UiErrorContext::Submit,
            &SubmitError::Protocol(ProtocolError::MissingPrediction),
        );
        assert!(err.status_line().starts_with("Prediction failed (Response)"));
    }

    #[test]
    fn startup_failure_has_no_exchange_kind() {
        let err = UiError::new(UiErrorContext::BackendStartup, None, "no runtime");
        assert_eq!(err.status_line(), "Worker startup failed (Unexpected): no runtime");
    }
}
