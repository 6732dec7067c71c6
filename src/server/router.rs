use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::Config;
use crate::draft::draft_locally;
use crate::protocol::{GenerateRequest, GenerateResponse};
use crate::server::error::ApiError;
use crate::server::upstream::ProcessingBackend;

/// Shared, immutable handler state.
#[derive(Clone, Default)]
pub struct AppState {
    backend: Option<Arc<ProcessingBackend>>,
}

impl AppState {
    pub fn new(backend: Option<ProcessingBackend>) -> Self {
        Self {
            backend: backend.map(Arc::new),
        }
    }

    /// Builds the processing backend client when it is enabled.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let backend = if config.backend.enabled {
            Some(ProcessingBackend::from_config(&config.backend)?)
        } else {
            None
        };
        Ok(Self::new(backend))
    }

    pub fn backend_enabled(&self) -> bool {
        self.backend.is_some()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub backend_enabled: bool,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}

async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;

    let text = request.incoming_text.trim();
    if text.is_empty() {
        return Err(ApiError::EmptyText);
    }
    let request = GenerateRequest {
        incoming_text: text.to_string(),
        ..request
    };

    let span = tracing::info_span!(
        "generate",
        request_id = %Uuid::new_v4(),
        style = %request.email_style,
        length = %request.email_length,
    );

    let response = async move {
        if let Some(backend) = &state.backend {
            match backend.process(&request).await {
                Ok(response) => {
                    tracing::info!(source = "backend", "reply generated");
                    return response;
                }
                Err(err) => {
                    tracing::warn!(url = backend.url(), error = %err, "processing backend failed, using local drafter");
                }
            }
        }

        let response = draft_locally(&request);
        tracing::info!(source = "local", "reply generated");
        response
    }
    .instrument(span)
    .await;

    Ok(Json(response))
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        backend_enabled: state.backend_enabled(),
    })
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
