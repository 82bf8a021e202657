//! HTTP credential provider backed by `reqwest`.

use async_trait::async_trait;
use chatpanel_common::new_correlation_id;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::request::{CreateSessionRequest, CreateSessionResponse};
use crate::{CredentialSource, SessionCredential, SessionError};

/// Longest slice of an error body carried into the error message.
const MAX_ERROR_BODY: usize = 200;

/// Fetches client secrets from the configured session endpoint.
pub struct HttpCredentialProvider {
    config: ProviderConfig,
    http: reqwest::Client,
}

impl HttpCredentialProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, SessionError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SessionError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

#[async_trait]
impl CredentialSource for HttpCredentialProvider {
    async fn request_credential(
        &self,
        previous: Option<&str>,
    ) -> Result<SessionCredential, SessionError> {
        let correlation_id = new_correlation_id();

        if self.config.verbose {
            debug!(
                correlation_id = %correlation_id,
                previous_secret_present = previous.is_some(),
                workflow_id = %self.config.workflow_id,
                endpoint = %self.config.endpoint,
                "Session credential requested"
            );
        }

        let body = CreateSessionRequest::new(&self.config.workflow_id);

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(correlation_id = %correlation_id, error = %e, "Session request failed");
                SessionError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(MAX_ERROR_BODY).collect::<String>();
            warn!(correlation_id = %correlation_id, %status, "Session endpoint rejected request");
            return Err(SessionError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: CreateSessionResponse = response
            .json()
            .await
            .map_err(|e| SessionError::Parse(e.to_string()))?;

        let secret = parsed.secret().ok_or(SessionError::MissingSecret)?;

        debug!(correlation_id = %correlation_id, "Session credential issued");
        Ok(SessionCredential::new(secret))
    }
}
