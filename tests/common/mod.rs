#![allow(dead_code)]

use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use survey_form::config::{Config, StoreFailurePolicy};
use survey_form::db::{AnswerStore, ConnectTarget};
use tower::ServiceExt;

/// A SQLite file under the temp dir, removed (with its WAL side files) on drop.
pub struct TempDb {
    pub path: PathBuf,
}

impl TempDb {
    pub fn new(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "survey-form-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));
        Self { path }
    }

    pub fn url(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = fs::remove_file(format!("{}{suffix}", self.path.display()));
        }
    }
}

/// A SQLite location whose parent directory does not exist, so every open fails.
pub fn unreachable_url() -> String {
    let mut path = std::env::temp_dir();
    path.push("survey-form-missing-dir");
    path.push("nested");
    path.push("answers.sqlite");
    format!("sqlite:{}", path.display())
}

pub fn config_for(database_url: String, policy: StoreFailurePolicy) -> Config {
    Config {
        database_url,
        db_acquire_timeout_secs: 1,
        store_failure_policy: policy,
        ..Config::default()
    }
}

pub fn build_app(cfg: &Config) -> (Router, AnswerStore) {
    let target = ConnectTarget::parse(&cfg.database_url).expect("invalid test database url");
    let store = AnswerStore::connect_lazy(target, cfg);
    let state = survey_form::SurveyState::new(store.clone(), cfg).expect("failed to build state");
    (survey_form::survey_router(state), store)
}

pub fn form_body(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed")
}

pub async fn post_form(app: &Router, body: String) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed")
}

pub fn content_type(resp: &Response<Body>) -> String {
    resp.headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub async fn body_string(resp: Response<Body>) -> String {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(body.to_vec()).expect("response body was not utf-8")
}
