pub mod metrics;
pub mod submission;
