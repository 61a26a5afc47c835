use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use prometheus::TEXT_FORMAT;

use crate::router::SurveyState;

/// GET /metrics -> Prometheus text exposition.
pub async fn metrics_handler(State(state): State<SurveyState>) -> Response {
    ([(CONTENT_TYPE, TEXT_FORMAT)], state.metrics.gather()).into_response()
}
