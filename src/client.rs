//! Client side of `POST /api/generate`.

use std::future::Future;

use reqwest::Client;
use thiserror::Error;

use crate::protocol::{ErrorBody, GenerateRequest, GenerateResponse};

/// Status text used when the service rejects a request without a message.
pub const GENERIC_REJECTION: &str = "Ошибка при генерации ответа.";
/// Status text used when the call fails before a usable response arrives.
pub const GENERIC_FAILURE: &str = "Не удалось сгенерировать ответ.";

/// Errors from a single generate call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response. `message` is the body's `error` field, if any.
    #[error("Generate request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// Connection or protocol failure.
    #[error("Generate request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// 2xx response whose body is not a valid response payload.
    #[error("Invalid generate response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text for the status bar.
    ///
    /// A non-empty server message wins; otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            ClientError::Rejected { .. } => GENERIC_REJECTION.to_string(),
            ClientError::Transport(_) | ClientError::Decode(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

/// The single network operation the form performs.
pub trait GenerateClient {
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl Future<Output = Result<GenerateResponse, ClientError>> + Send;
}

/// reqwest implementation posting JSON to a fixed endpoint.
#[derive(Clone)]
pub struct HttpGenerateClient {
    client: Client,
    endpoint: String,
}

impl HttpGenerateClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GenerateClient for HttpGenerateClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ClientError> {
        tracing::debug!(endpoint = %self.endpoint, "sending generate request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ClientError::Transport)?;

        if !status.is_success() {
            // An unreadable error body counts as an empty object.
            let parsed: ErrorBody = serde_json::from_slice(&body).unwrap_or_default();
            tracing::warn!(status = status.as_u16(), error = ?parsed.error, "generate rejected");
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: parsed.error,
            });
        }

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
