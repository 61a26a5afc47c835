use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::config::{Config, StoreFailurePolicy};
use crate::db::AnswerStore;
use crate::error::SurveyError;
use crate::handlers::{
    form::{form_handler, submit_handler},
    health::health_handler,
    metrics::metrics_handler,
};
use crate::metrics::Metrics;
use crate::middleware::metrics::track_requests;
use crate::render::FormRenderer;

#[derive(Clone)]
pub struct SurveyState {
    pub store: AnswerStore,
    pub renderer: FormRenderer,
    pub metrics: Arc<Metrics>,
    pub questions: Arc<[String]>,
    pub failure_policy: StoreFailurePolicy,
}

impl SurveyState {
    pub fn new(store: AnswerStore, cfg: &Config) -> Result<Self, SurveyError> {
        Ok(Self {
            store,
            renderer: FormRenderer::new()?,
            metrics: Arc::new(Metrics::new()?),
            questions: cfg.survey_questions.clone().into(),
            failure_policy: cfg.store_failure_policy,
        })
    }
}

pub fn survey_router(state: SurveyState) -> Router {
    Router::new()
        .route("/", get(form_handler))
        .route("/submit", post(submit_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .with_state(state)
}
