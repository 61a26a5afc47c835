//! Database module: the answer store and its SQL.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring `answers` rows
//! - `schema.rs`: DDL executed before every write (PostgreSQL and SQLite)
//! - `target.rs`: connection string parsing (URLs and libpq keyword DSNs)
//! - `postgres.rs` / `sqlite.rs`: per-backend queries on a checked-out connection
//! - `store.rs`: `AnswerStore`, the pooled entry point used by handlers

pub mod models;
pub mod postgres;
pub mod schema;
pub mod sqlite;
pub mod store;
pub mod target;

pub use models::{AnswerRecord, NewAnswer};
pub use store::AnswerStore;
pub use target::ConnectTarget;
