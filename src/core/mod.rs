pub mod cache;
pub mod orchestrator;
pub mod payload;
pub mod submit;

pub use crate::domain::model::{
    Payload, RunSummary, Section, Semester, SubmissionOutcome, SubmissionResult, SubmissionStatus,
};
pub use crate::domain::ports::{CacheStore, Submitter};
pub use crate::utils::error::Result;
