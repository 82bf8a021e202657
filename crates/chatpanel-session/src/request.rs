//! Wire types for the session-creation endpoint.

use serde::{Deserialize, Serialize};

/// `POST` body sent to the session endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionRequest<'a> {
    pub workflow: WorkflowRef<'a>,
    pub chatkit_configuration: ChatkitConfiguration,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowRef<'a> {
    pub id: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatkitConfiguration {
    pub file_upload: FileUpload,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileUpload {
    pub enabled: bool,
}

impl<'a> CreateSessionRequest<'a> {
    /// Request for `workflow_id` with attachments enabled.
    pub fn new(workflow_id: &'a str) -> Self {
        Self {
            workflow: WorkflowRef { id: workflow_id },
            chatkit_configuration: ChatkitConfiguration {
                file_upload: FileUpload { enabled: true },
            },
        }
    }
}

/// The part of the endpoint's response the panel cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionResponse {
    #[serde(default)]
    pub client_secret: Option<serde_json::Value>,
}

impl CreateSessionResponse {
    /// The secret, if present as a non-empty string.
    pub fn secret(&self) -> Option<&str> {
        self.client_secret
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}
