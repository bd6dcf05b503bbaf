use async_trait::async_trait;
use reqwest::Client;
use shared::{FormRecord, PredictionReply, PredictionResult};
use tracing::{debug, info, warn};
use url::Url;

pub mod config;
pub mod error;
pub mod profile;

pub use config::{load_settings, prepare_backend_url, Settings};
pub use error::SubmitError;
pub use profile::{Profile, SubmissionPolicy};

/// Something that can turn a form record into a prediction.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, record: &FormRecord) -> Result<PredictionReply, SubmitError>;

    /// Banner text served by the backend root, used as a liveness probe.
    async fn health(&self) -> Result<String, SubmitError>;
}

pub struct PredictionClient {
    http: Client,
    backend_url: String,
    profile: Profile,
}

impl PredictionClient {
    pub fn new(backend_url: &Url, profile: Profile) -> Self {
        Self {
            http: Client::new(),
            backend_url: backend_url.as_str().trim_end_matches('/').to_string(),
            profile,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.backend_url
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.backend_url)
    }
}

#[async_trait]
impl PredictionService for PredictionClient {
    async fn predict(&self, record: &FormRecord) -> Result<PredictionReply, SubmitError> {
        let res = self
            .http
            .post(self.predict_url())
            .json(record)
            .send()
            .await?;

        let status = res.status();
        if self.profile.inspects_status() && !status.is_success() {
            return Err(SubmitError::Status(status));
        }
        debug!(%status, "prediction backend responded");

        let body = res.bytes().await?;
        Ok(self.profile.response_shape().decode(&body)?)
    }

    async fn health(&self) -> Result<String, SubmitError> {
        let body = self
            .http
            .get(format!("{}/", self.backend_url))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

/// Runs one submission to completion. Failures of any kind become
/// `PredictionResult::Failed`; nothing propagates to the caller.
pub async fn submit_form(service: &dyn PredictionService, record: &FormRecord) -> PredictionResult {
    match service.predict(record).await {
        Ok(reply) => {
            info!(
                label = %reply.label,
                probability = ?reply.probability,
                "prediction received"
            );
            PredictionResult::Outcome(reply)
        }
        Err(err) => {
            warn!("prediction submission failed: {err}");
            PredictionResult::Failed {
                kind: err.kind(),
                detail: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
