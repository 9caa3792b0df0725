pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::cache::{CacheReader, LocalCache};
pub use core::orchestrator::Orchestrator;
pub use core::submit::WebhookSubmitter;
pub use domain::model::{Payload, RunSummary, Section, Semester, SubmissionResult};
pub use domain::ports::{CacheStore, Submitter};
pub use utils::error::{AppError, Result};
