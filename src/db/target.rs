use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::SurveyError;

/// Where the answer store lives, resolved from the configured connection string.
#[derive(Debug, Clone)]
pub enum ConnectTarget {
    Postgres(PgConnectOptions),
    Sqlite(SqliteConnectOptions),
}

impl ConnectTarget {
    /// Accepts `postgres://` / `postgresql://` URLs, `sqlite:` URLs, or a libpq
    /// keyword/value DSN such as `dbname=appdb user=appuser host=db`.
    pub fn parse(conn: &str) -> Result<Self, SurveyError> {
        let conn = conn.trim();

        if conn.starts_with("postgres://") || conn.starts_with("postgresql://") {
            let opts = PgConnectOptions::from_str(conn).map_err(config_error)?;
            return Ok(Self::Postgres(opts));
        }

        if conn.starts_with("sqlite:") {
            let opts = SqliteConnectOptions::from_str(conn)
                .map_err(config_error)?
                .create_if_missing(true);
            return Ok(Self::Sqlite(opts));
        }

        parse_keyword_dsn(conn).map(Self::Postgres)
    }
}

fn parse_keyword_dsn(dsn: &str) -> Result<PgConnectOptions, SurveyError> {
    if dsn.is_empty() {
        return Err(SurveyError::ConfigError(
            "empty database connection string".to_string(),
        ));
    }

    // Quoted values (libpq `key='a b'`) are not supported.
    let mut opts = PgConnectOptions::new_without_pgpass();
    for pair in dsn.split_whitespace() {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(SurveyError::ConfigError(format!(
                "malformed connection parameter `{pair}`"
            )));
        };

        opts = match key {
            "host" | "hostaddr" => opts.host(value),
            "port" => {
                let port = value.parse::<u16>().map_err(|e| {
                    SurveyError::ConfigError(format!("invalid port `{value}`: {e}"))
                })?;
                opts.port(port)
            }
            "dbname" => opts.database(value),
            "user" => opts.username(value),
            "password" => opts.password(value),
            "sslmode" => opts.ssl_mode(PgSslMode::from_str(value).map_err(config_error)?),
            "application_name" => opts.application_name(value),
            other => {
                return Err(SurveyError::ConfigError(format!(
                    "unsupported connection parameter `{other}`"
                )));
            }
        };
    }
    Ok(opts)
}

fn config_error(e: sqlx::Error) -> SurveyError {
    SurveyError::ConfigError(e.to_string())
}
