use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, info};

use crate::middleware::submission::Submission;
use crate::{SurveyError, router::SurveyState};

/// GET / -> the empty survey form.
pub async fn form_handler(State(state): State<SurveyState>) -> Result<Html<String>, SurveyError> {
    let body = state.renderer.render(&state.questions, false, false)?;
    Ok(Html(body))
}

/// POST /submit -> persist the answers and re-render the form with a banner.
///
/// Store failures never surface as a JSON error: the form comes back with the
/// error banner, and the status is chosen by the configured failure policy.
pub async fn submit_handler(
    State(state): State<SurveyState>,
    Submission(answers): Submission,
) -> Result<Response, SurveyError> {
    match state.store.save_answers(&answers).await {
        Ok(ids) => {
            for (id, item) in ids.iter().zip(&answers) {
                info!(
                    id,
                    question = %item.question,
                    answer = %item.answer,
                    "answer saved"
                );
            }
            state.metrics.record_saved(ids.len());

            let body = state.renderer.render(&state.questions, true, false)?;
            Ok(Html(body).into_response())
        }
        Err(e) => {
            error!(error = %e, count = answers.len(), "failed to save answers");
            state.metrics.record_store_error();

            let body = state.renderer.render(&state.questions, false, true)?;
            Ok((state.failure_policy.status(), Html(body)).into_response())
        }
    }
}
