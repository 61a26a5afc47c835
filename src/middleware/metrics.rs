use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::router::SurveyState;

/// Count and time every request, labelled by the route template it matched.
pub async fn track_requests(
    State(state): State<SurveyState>,
    req: Request,
    next: Next,
) -> Response {
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().as_str().to_owned();

    let started = Instant::now();
    let resp = next.run(req).await;

    state
        .metrics
        .observe_request(&method, &path, resp.status().as_u16(), started.elapsed());
    resp
}
