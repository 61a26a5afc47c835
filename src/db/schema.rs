//! SQL DDL for the `answers` table.
//! Both statements are idempotent and run inside the write transaction.

/// PostgreSQL schema; `id` is a SERIAL (int4) and is cast to BIGINT when read back.
pub const POSTGRES_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS answers (
    id SERIAL PRIMARY KEY,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// SQLite schema; `CURRENT_TIMESTAMP` yields `YYYY-MM-DD HH:MM:SS` in UTC.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS answers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;
