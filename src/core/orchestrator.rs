use crate::core::cache::CacheReader;
use crate::core::payload;
use crate::core::{
    CacheStore, RunSummary, Semester, SubmissionOutcome, SubmissionResult, SubmissionStatus,
    Submitter,
};
use crate::utils::error::Result;

/// Drives one run: discover semesters, filter to the requested subset,
/// submit each one in discovery order, aggregate the outcomes.
///
/// A failure for one semester is recorded and the loop continues; only a
/// failure to read the semester list itself aborts the run.
pub struct Orchestrator<S: CacheStore, W: Submitter> {
    reader: CacheReader<S>,
    submitter: W,
    semester_ids: Option<Vec<i64>>,
}

impl<S: CacheStore, W: Submitter> Orchestrator<S, W> {
    pub fn new(reader: CacheReader<S>, submitter: W, semester_ids: Option<Vec<i64>>) -> Self {
        Self {
            reader,
            submitter,
            semester_ids,
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let semesters = self.reader.list_semesters().await?;
        tracing::info!(count = semesters.len(), "discovered semesters");

        let mut summary = RunSummary::default();
        let selected = self.select(&semesters, &mut summary);

        for semester in selected {
            tracing::info!(
                semester_id = semester.id,
                name = %semester.name_zh,
                "processing semester"
            );
            let status = self.process(semester).await;
            summary.record(SubmissionResult {
                semester_id: semester.id,
                semester_name: semester.name_zh.clone(),
                status,
            });
        }

        tracing::info!(
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            skipped = summary.skipped(),
            "submission complete"
        );
        Ok(summary)
    }

    /// Intersects the discovered list with the requested subset, preserving
    /// discovery order. Requested ids not present in the cache are recorded
    /// as skips, not errors.
    fn select<'a>(
        &self,
        semesters: &'a [Semester],
        summary: &mut RunSummary,
    ) -> Vec<&'a Semester> {
        let Some(requested) = &self.semester_ids else {
            return semesters.iter().collect();
        };

        for id in requested {
            if !semesters.iter().any(|s| s.id == *id) {
                tracing::warn!(semester_id = id, "requested semester not in cache, skipping");
                summary.record(SubmissionResult {
                    semester_id: *id,
                    semester_name: String::new(),
                    status: SubmissionStatus::SkippedUnknownId,
                });
            }
        }

        semesters
            .iter()
            .filter(|s| requested.contains(&s.id))
            .collect()
    }

    async fn process(&self, semester: &Semester) -> SubmissionStatus {
        let sections = match self.reader.load_sections(semester.id).await {
            Ok(sections) => sections,
            Err(e) => {
                tracing::error!(semester_id = semester.id, error = %e, "failed to load sections");
                return SubmissionStatus::Failed { error: e };
            }
        };

        let payload = payload::build(semester.clone(), sections);
        match self.submitter.submit(&payload).await {
            Ok(SubmissionOutcome::Delivered { status }) => {
                SubmissionStatus::Submitted { status }
            }
            Ok(SubmissionOutcome::DryRun) => SubmissionStatus::DryRun,
            Err(e) => {
                tracing::error!(semester_id = semester.id, error = %e, "submission failed");
                SubmissionStatus::Failed { error: e }
            }
        }
    }
}
