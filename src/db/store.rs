use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{PgPool, SqlitePool};
use tracing::info;

use crate::config::Config;
use crate::db::models::{AnswerRecord, NewAnswer};
use crate::db::target::ConnectTarget;
use crate::db::{postgres, sqlite};
use crate::error::SurveyError;

/// Pooled access to the `answers` table.
///
/// Pools connect lazily: building a store never touches the database, so the
/// server starts (and `/health` reports) even while the database is down.
#[derive(Clone)]
pub enum AnswerStore {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl AnswerStore {
    pub fn from_config(cfg: &Config) -> Result<Self, SurveyError> {
        let target = ConnectTarget::parse(&cfg.database_url)?;
        let store = Self::connect_lazy(target, cfg);
        info!(
            backend = store.backend(),
            max_connections = cfg.db_max_connections,
            acquire_timeout_secs = cfg.acquire_timeout().as_secs(),
            "answer store configured"
        );
        Ok(store)
    }

    pub fn connect_lazy(target: ConnectTarget, cfg: &Config) -> Self {
        let max_connections = cfg.db_max_connections.max(1);
        match target {
            ConnectTarget::Postgres(opts) => Self::Postgres(
                PgPoolOptions::new()
                    .max_connections(max_connections)
                    .acquire_timeout(cfg.acquire_timeout())
                    .connect_lazy_with(opts),
            ),
            ConnectTarget::Sqlite(opts) => Self::Sqlite(
                SqlitePoolOptions::new()
                    .max_connections(max_connections)
                    .acquire_timeout(cfg.acquire_timeout())
                    .connect_lazy_with(opts),
            ),
        }
    }

    pub fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Sqlite(_) => "sqlite",
        }
    }

    /// Create the table if needed and insert every answer atomically.
    pub async fn save_answers(&self, answers: &[NewAnswer]) -> Result<Vec<i64>, SurveyError> {
        match self {
            Self::Postgres(pool) => postgres::save_answers(pool, answers).await,
            Self::Sqlite(pool) => sqlite::save_answers(pool, answers).await,
        }
    }

    /// Check a connection out of the pool and round-trip to the server.
    pub async fn ping(&self) -> Result<(), SurveyError> {
        match self {
            Self::Postgres(pool) => postgres::ping(pool).await,
            Self::Sqlite(pool) => sqlite::ping(pool).await,
        }
    }

    pub async fn count_answers(&self) -> Result<i64, SurveyError> {
        match self {
            Self::Postgres(pool) => postgres::count_answers(pool).await,
            Self::Sqlite(pool) => sqlite::count_answers(pool).await,
        }
    }

    pub async fn list_answers(&self) -> Result<Vec<AnswerRecord>, SurveyError> {
        match self {
            Self::Postgres(pool) => postgres::list_answers(pool).await,
            Self::Sqlite(pool) => sqlite::list_answers(pool).await,
        }
    }

    pub async fn close(&self) {
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
    }
}
