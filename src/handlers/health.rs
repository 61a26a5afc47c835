use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::router::SurveyState;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            error: None,
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            database: "disconnected".to_string(),
            error: Some(error.into()),
        }
    }
}

/// GET /health -> probes the store once; always answers 200.
pub async fn health_handler(State(state): State<SurveyState>) -> Json<HealthResponse> {
    match state.store.ping().await {
        Ok(()) => Json(HealthResponse::healthy()),
        Err(e) => {
            warn!(backend = state.store.backend(), error = %e, "store health probe failed");
            Json(HealthResponse::unhealthy(e.to_string()))
        }
    }
}
