//! Queries against the SQLite answer store, used for local runs and tests.

use sqlx::{Connection, SqlitePool};

use crate::db::models::{AnswerRecord, NewAnswer};
use crate::db::schema::SQLITE_INIT;
use crate::error::SurveyError;

/// Ensure the table exists and insert all answers in one transaction.
/// Returns the store-assigned ids in input order.
pub async fn save_answers(
    pool: &SqlitePool,
    answers: &[NewAnswer],
) -> Result<Vec<i64>, SurveyError> {
    let mut conn = pool.acquire().await?;
    let mut tx = conn.begin().await?;

    sqlx::query(SQLITE_INIT).execute(&mut *tx).await?;

    let mut ids = Vec::with_capacity(answers.len());
    for item in answers {
        let id = sqlx::query("INSERT INTO answers (question, answer) VALUES (?, ?)")
            .bind(item.question.as_str())
            .bind(item.answer.as_str())
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        ids.push(id);
    }

    tx.commit().await?;
    Ok(ids)
}

pub async fn ping(pool: &SqlitePool) -> Result<(), SurveyError> {
    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    Ok(())
}

pub async fn count_answers(pool: &SqlitePool) -> Result<i64, SurveyError> {
    let mut conn = pool.acquire().await?;
    sqlx::query(SQLITE_INIT).execute(&mut *conn).await?;
    let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM answers")
        .fetch_one(&mut *conn)
        .await?;
    Ok(rec.0)
}

pub async fn list_answers(pool: &SqlitePool) -> Result<Vec<AnswerRecord>, SurveyError> {
    let mut conn = pool.acquire().await?;
    sqlx::query(SQLITE_INIT).execute(&mut *conn).await?;
    let rows = sqlx::query_as::<_, AnswerRecord>(
        "SELECT id, question, answer, created_at FROM answers ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}
