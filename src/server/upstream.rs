use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::timeout;

use crate::config::BackendConfig;
use crate::protocol::{deserialize_facts, EmailStyle, ExtractedFact, GenerateRequest, GenerateResponse};

/// Failures talking to the processing backend. All of them trigger the
/// local fallback.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Connection to processing backend failed: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("Processing backend timed out after {0}s")]
    Timeout(u64),

    #[error("Processing backend returned status {0}")]
    Status(u16),

    #[error("Invalid processing backend response: {0}")]
    Decode(String),

    #[error("Processing backend response lacks classification or reply")]
    Incomplete,
}

/// Tone name the processing backend expects for a style.
pub fn tone(style: EmailStyle) -> &'static str {
    match style {
        EmailStyle::Formal => "формальный",
        EmailStyle::Business => "деловой",
        EmailStyle::Client => "дружелюбный",
    }
}

#[derive(Debug, Serialize)]
struct ProcessRequest<'a> {
    text: &'a str,
    tone: &'static str,
    length: &'static str,
}

#[derive(Debug, Deserialize)]
struct ProcessResponse {
    #[serde(default)]
    classification: Option<String>,
    #[serde(default)]
    response: Option<String>,
    #[serde(default, deserialize_with = "deserialize_facts")]
    extracted_info: Option<Vec<ExtractedFact>>,
    #[serde(default, rename = "extractedInfo", deserialize_with = "deserialize_facts")]
    extracted_info_camel: Option<Vec<ExtractedFact>>,
}

impl ProcessResponse {
    fn into_generate_response(self) -> Result<GenerateResponse, UpstreamError> {
        let (Some(classification), Some(answer)) = (self.classification, self.response) else {
            return Err(UpstreamError::Incomplete);
        };
        let facts = self
            .extracted_info
            .or(self.extracted_info_camel)
            .unwrap_or_default();
        Ok(GenerateResponse {
            classification: Some(classification),
            extracted_info: Some(facts),
            answer_text: Some(answer),
        })
    }
}

/// Client for the external letter-processing service.
pub struct ProcessingBackend {
    client: Client,
    url: String,
    request_timeout: Duration,
}

impl ProcessingBackend {
    pub fn from_config(config: &BackendConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
            request_timeout: Duration::from_secs(u64::from(config.timeout_seconds)),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Forwards a validated request and maps the answer to the form contract.
    pub async fn process(&self, request: &GenerateRequest) -> Result<GenerateResponse, UpstreamError> {
        let result = timeout(self.request_timeout, self.do_process(request)).await;

        match result {
            Ok(response) => response,
            Err(_) => Err(UpstreamError::Timeout(self.request_timeout.as_secs())),
        }
    }

    async fn do_process(&self, request: &GenerateRequest) -> Result<GenerateResponse, UpstreamError> {
        let body = ProcessRequest {
            text: &request.incoming_text,
            tone: tone(request.email_style),
            length: request.email_length.as_str(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(UpstreamError::Connection)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(UpstreamError::Connection)?;
        let parsed: ProcessResponse =
            serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Decode(e.to_string()))?;
        parsed.into_generate_response()
    }
}
