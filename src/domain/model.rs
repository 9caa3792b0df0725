use crate::utils::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An academic term as it appears in the cached semester list.
///
/// Fields this tool does not interpret are kept verbatim in `extra` so the
/// submitted record matches the cache byte-for-byte at the field level even
/// when the upstream schema grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    pub id: i64,
    #[serde(rename = "nameZh")]
    pub name_zh: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A scheduled course instance within a semester.
///
/// Sections are treated as an open record: every field passes through to the
/// webhook unmodified. Typed accessors exist only for the fields this tool
/// logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Section {
    pub fn id(&self) -> Option<i64> {
        self.fields.get("id").and_then(Value::as_i64)
    }

    pub fn code(&self) -> Option<&str> {
        self.fields.get("code").and_then(Value::as_str)
    }
}

/// The unit submitted to the webhook: one semester plus its sections.
#[derive(Debug, Clone, Serialize)]
pub struct Payload {
    pub semester: Semester,
    pub sections: Vec<Section>,
}

/// What the submitter reports back for one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The webhook accepted the payload with this 2xx status.
    Delivered { status: u16 },
    /// Dry-run mode: the payload was logged, nothing was sent.
    DryRun,
}

/// Per-semester outcome recorded by the orchestrator.
#[derive(Debug)]
pub enum SubmissionStatus {
    Submitted { status: u16 },
    DryRun,
    Failed { error: AppError },
    /// A requested semester id that was not present in the cache.
    SkippedUnknownId,
}

#[derive(Debug)]
pub struct SubmissionResult {
    pub semester_id: i64,
    pub semester_name: String,
    pub status: SubmissionStatus,
}

/// Aggregate of one run, owned solely by the orchestrator.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub results: Vec<SubmissionResult>,
}

impl RunSummary {
    pub fn record(&mut self, result: SubmissionResult) {
        self.results.push(result);
    }

    pub fn succeeded(&self) -> usize {
        self.results
            .iter()
            .filter(|r| {
                matches!(
                    r.status,
                    SubmissionStatus::Submitted { .. } | SubmissionStatus::DryRun
                )
            })
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, SubmissionStatus::Failed { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, SubmissionStatus::SkippedUnknownId))
            .count()
    }

    /// Unknown requested ids are tolerated skips; any recorded failure makes
    /// the whole run fail.
    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}
