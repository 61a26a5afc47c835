//! Queries against the PostgreSQL answer store.
//!
//! Every function checks one connection out of the pool and hands it back when the
//! guard drops, whichever way the function returns.

use sqlx::{Connection, PgPool};

use crate::db::models::{AnswerRecord, NewAnswer};
use crate::db::schema::POSTGRES_INIT;
use crate::error::SurveyError;

/// Ensure the table exists and insert all answers in one transaction.
/// Returns the store-assigned ids in input order.
pub async fn save_answers(pool: &PgPool, answers: &[NewAnswer]) -> Result<Vec<i64>, SurveyError> {
    let mut conn = pool.acquire().await?;
    let mut tx = conn.begin().await?;

    sqlx::query(POSTGRES_INIT).execute(&mut *tx).await?;

    let mut ids = Vec::with_capacity(answers.len());
    for item in answers {
        let rec: (i64,) = sqlx::query_as(
            "INSERT INTO answers (question, answer) VALUES ($1, $2) RETURNING id::BIGINT",
        )
        .bind(item.question.as_str())
        .bind(item.answer.as_str())
        .fetch_one(&mut *tx)
        .await?;
        ids.push(rec.0);
    }

    tx.commit().await?;
    Ok(ids)
}

pub async fn ping(pool: &PgPool) -> Result<(), SurveyError> {
    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    Ok(())
}

pub async fn count_answers(pool: &PgPool) -> Result<i64, SurveyError> {
    let mut conn = pool.acquire().await?;
    sqlx::query(POSTGRES_INIT).execute(&mut *conn).await?;
    let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM answers")
        .fetch_one(&mut *conn)
        .await?;
    Ok(rec.0)
}

pub async fn list_answers(pool: &PgPool) -> Result<Vec<AnswerRecord>, SurveyError> {
    let mut conn = pool.acquire().await?;
    sqlx::query(POSTGRES_INIT).execute(&mut *conn).await?;
    let rows = sqlx::query_as::<_, AnswerRecord>(
        "SELECT id::BIGINT AS id, question, answer, created_at FROM answers ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}
