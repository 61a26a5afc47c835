use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted row of the `answers` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct AnswerRecord {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub created_at: NaiveDateTime,
}

/// A validated question/answer pair waiting to be inserted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAnswer {
    pub question: String,
    pub answer: String,
}

impl NewAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
