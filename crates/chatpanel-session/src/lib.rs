//! Session credential acquisition for the chat panel.
//!
//! A [`CredentialSource`] turns the configured workflow into a short-lived
//! client secret the embedded widget uses to open its session. The HTTP
//! implementation posts to a session-creation endpoint; it never retries on
//! its own, retry is a caller-triggered reset.

mod client;
mod config;
mod request;

use std::fmt;

use async_trait::async_trait;

pub use client::HttpCredentialProvider;
pub use config::ProviderConfig;
pub use request::{CreateSessionRequest, CreateSessionResponse};

/// Anything that can mint a session credential.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Request a fresh credential. `previous` is the secret of the session
    /// being replaced, if any.
    async fn request_credential(
        &self,
        previous: Option<&str>,
    ) -> Result<SessionCredential, SessionError>;
}

/// Opaque client secret for one session epoch. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredential(String);

impl SessionCredential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCredential([REDACTED])")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Session endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Session response did not include a client_secret")]
    MissingSecret,
}
