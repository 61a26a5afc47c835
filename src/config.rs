use std::sync::LazyLock;
use std::time::Duration;

use axum::http::StatusCode;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Questions shown on the survey form when none are configured.
pub const DEFAULT_QUESTIONS: [&str; 3] = [
    "Jak oceniasz usługę?",
    "Czy polecisz nas?",
    "Jak często korzystasz?",
];

/// libpq-style fallback used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "dbname=appdb user=appuser password=apppass host=db";

/// Environment variables consulted on top of the defaults.
const ENV_KEYS: [&str; 7] = [
    "database_url",
    "listen_addr",
    "loglevel",
    "db_max_connections",
    "db_acquire_timeout_secs",
    "store_failure_policy",
    "survey_questions",
];

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| panic!("invalid configuration: {e}"))
});

/// What `/submit` answers with when the store rejects a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreFailurePolicy {
    /// Re-render the form with the error banner and status 200.
    #[default]
    RenderOk,
    /// Re-render the form with the error banner and status 500.
    ServerError,
}

impl StoreFailurePolicy {
    pub fn status(self) -> StatusCode {
        match self {
            Self::RenderOk => StatusCode::OK,
            Self::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub store_failure_policy: StoreFailurePolicy,
    pub survey_questions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            db_max_connections: 5,
            db_acquire_timeout_secs: 5,
            store_failure_policy: StoreFailurePolicy::default(),
            survey_questions: DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        }
    }
}

impl Config {
    /// Defaults overlaid with the process environment.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::raw().only(&ENV_KEYS))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs.max(1))
    }
}
