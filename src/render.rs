use std::sync::Arc;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::SurveyError;

const FORM_TEMPLATE_NAME: &str = "form";
const FORM_TEMPLATE: &str = include_str!("../templates/form.html.hbs");
const FORM_TITLE: &str = "Formularz Ankiety";

#[derive(Serialize)]
struct FormContext<'a> {
    title: &'static str,
    questions: &'a [String],
    submitted: bool,
    error: bool,
}

/// Renders the survey page from the embedded handlebars template.
#[derive(Clone)]
pub struct FormRenderer {
    registry: Arc<Handlebars<'static>>,
}

impl FormRenderer {
    pub fn new() -> Result<Self, SurveyError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(FORM_TEMPLATE_NAME, FORM_TEMPLATE)?;
        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    /// One labelled answer input per question, in order, inside a single form
    /// posting to `/submit`. `submitted` and `error` toggle the banners.
    pub fn render(
        &self,
        questions: &[String],
        submitted: bool,
        error: bool,
    ) -> Result<String, SurveyError> {
        let ctx = FormContext {
            title: FORM_TITLE,
            questions,
            submitted,
            error,
        };
        Ok(self.registry.render(FORM_TEMPLATE_NAME, &ctx)?)
    }
}
