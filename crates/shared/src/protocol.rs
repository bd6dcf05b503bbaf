use serde::Deserialize;

use crate::error::ProtocolError;

/// Label the backend uses for "employee is predicted to leave".
pub const LEAVE_LABEL: &str = "Yes";

/// JSON shapes the `/predict` endpoint answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseShape {
    /// `{ "prediction": "Yes", "probability": 0.71 }`
    PredictionProbability,
    /// `{ "Attrition Prediction": "Yes", "Probability": 0.71 }` or
    /// `{ "error": "..." }`
    #[default]
    AttritionLabel,
}

#[derive(Debug, Deserialize)]
struct ProbabilityBody {
    prediction: Option<String>,
    #[serde(default)]
    probability: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct LabeledBody {
    #[serde(rename = "Attrition Prediction")]
    attrition_prediction: Option<String>,
    #[serde(rename = "Probability", default)]
    probability: Option<f64>,
    #[serde(default)]
    error: Option<String>,
}

impl ResponseShape {
    pub fn decode(self, body: &[u8]) -> Result<PredictionReply, ProtocolError> {
        match self {
            ResponseShape::PredictionProbability => {
                let parsed: ProbabilityBody = serde_json::from_slice(body)?;
                let label = parsed.prediction.ok_or(ProtocolError::MissingPrediction)?;
                Ok(PredictionReply {
                    label,
                    probability: parsed.probability,
                })
            }
            ResponseShape::AttritionLabel => {
                let parsed: LabeledBody = serde_json::from_slice(body)?;
                match (parsed.attrition_prediction, parsed.error) {
                    (Some(label), _) => Ok(PredictionReply {
                        label,
                        probability: parsed.probability,
                    }),
                    (None, Some(message)) => Err(ProtocolError::Backend(message)),
                    (None, None) => Err(ProtocolError::MissingPrediction),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReply {
    pub label: String,
    pub probability: Option<f64>,
}

/// Which stage of a submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never got an answer.
    Transport,
    /// Non-success HTTP status on a profile that checks it.
    Status,
    /// The body was not JSON or had no prediction in it.
    Payload,
    /// The backend answered with an `error` key.
    Backend,
}

impl FailureKind {
    pub fn label(self) -> &'static str {
        match self {
            FailureKind::Transport => "Transport",
            FailureKind::Status => "HTTP status",
            FailureKind::Payload => "Response",
            FailureKind::Backend => "Backend",
        }
    }
}

impl ProtocolError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ProtocolError::Backend(_) => FailureKind::Backend,
            ProtocolError::Json(_) | ProtocolError::MissingPrediction => FailureKind::Payload,
        }
    }
}

/// Outcome of the last applied submission.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResult {
    Outcome(PredictionReply),
    Failed { kind: FailureKind, detail: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultDisplay {
    WillLeave,
    WillStay,
    Error,
}

impl ResultDisplay {
    pub fn headline(self) -> &'static str {
        match self {
            ResultDisplay::WillLeave => "⚠️ The employee is more likely to leave",
            ResultDisplay::WillStay => "✅ The employee is more likely to stay",
            ResultDisplay::Error => "Error connecting to the prediction service",
        }
    }
}

impl PredictionResult {
    /// Display state for this result. An empty label renders nothing.
    pub fn display(&self) -> Option<ResultDisplay> {
        match self {
            PredictionResult::Outcome(reply) if reply.label.is_empty() => None,
            PredictionResult::Outcome(reply) if reply.label == LEAVE_LABEL => {
                Some(ResultDisplay::WillLeave)
            }
            PredictionResult::Outcome(_) => Some(ResultDisplay::WillStay),
            PredictionResult::Failed { .. } => Some(ResultDisplay::Error),
        }
    }

    pub fn probability(&self) -> Option<f64> {
        match self {
            PredictionResult::Outcome(reply) => reply.probability,
            PredictionResult::Failed { .. } => None,
        }
    }
}
