pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod render;
pub mod router;

pub use error::SurveyError;
pub use render::FormRenderer;
pub use router::{SurveyState, survey_router};
