use axum::extract::{FromRequest, Request};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::db::NewAnswer;
use crate::error::SurveyError;
use crate::router::SurveyState;

/// Raw `/submit` body. Repeated `question`/`answer` keys are collected in order,
/// so a whole form posts as parallel lists and a single pair as one-element lists.
#[derive(Debug, Default, Deserialize)]
pub struct RawSubmission {
    #[serde(default)]
    pub question: Vec<String>,
    #[serde(default)]
    pub answer: Vec<String>,
}

/// Validated answers, in the order they were posted.
#[derive(Debug)]
pub struct Submission(pub Vec<NewAnswer>);

impl FromRequest<SurveyState> for Submission {
    type Rejection = SurveyError;

    async fn from_request(req: Request, state: &SurveyState) -> Result<Self, Self::Rejection> {
        let Form(raw) = Form::<RawSubmission>::from_request(req, state)
            .await
            .map_err(|rejection| SurveyError::Validation(rejection.to_string()))?;

        validate(raw, &state.questions).map(Submission)
    }
}

/// Zip the posted lists into pairs, rejecting anything that is not a non-empty
/// answer to a known question. No pair is accepted unless all of them are.
/// Answers are stored exactly as posted; only the question is trimmed for matching.
pub fn validate(raw: RawSubmission, known: &[String]) -> Result<Vec<NewAnswer>, SurveyError> {
    if raw.question.is_empty() {
        return Err(SurveyError::Validation(
            "field `question` is required".to_string(),
        ));
    }
    if raw.answer.is_empty() {
        return Err(SurveyError::Validation("field `answer` is required".to_string()));
    }
    if raw.question.len() != raw.answer.len() {
        return Err(SurveyError::Validation(format!(
            "got {} questions but {} answers",
            raw.question.len(),
            raw.answer.len()
        )));
    }

    let mut pairs: Vec<NewAnswer> = Vec::with_capacity(raw.question.len());
    for (question, answer) in raw.question.into_iter().zip(raw.answer) {
        let question = question.trim();

        if question.is_empty() {
            return Err(SurveyError::Validation(
                "field `question` must not be empty".to_string(),
            ));
        }
        if !known.iter().any(|q| q == question) {
            return Err(SurveyError::Validation(format!(
                "unknown question `{question}`"
            )));
        }
        if answer.trim().is_empty() {
            return Err(SurveyError::Validation(format!(
                "answer to `{question}` must not be empty"
            )));
        }
        if pairs.iter().any(|p| p.question == question) {
            return Err(SurveyError::Validation(format!(
                "question `{question}` answered more than once"
            )));
        }

        pairs.push(NewAnswer::new(question, answer));
    }
    Ok(pairs)
}
