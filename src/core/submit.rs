use crate::core::{Payload, SubmissionOutcome, Submitter};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// Posts one payload per call to the configured endpoint. One attempt per
/// call; retry policy, if any, belongs to the caller.
#[derive(Debug)]
pub struct WebhookSubmitter {
    client: Client,
    endpoint: Option<String>,
    dry_run: bool,
}

impl WebhookSubmitter {
    /// `endpoint` may only be absent in dry-run mode; configuration
    /// validation enforces the same rule earlier, this keeps the type
    /// honest for library callers.
    pub fn new(endpoint: Option<String>, timeout: Duration, dry_run: bool) -> Result<Self> {
        if endpoint.is_none() && !dry_run {
            return Err(AppError::ConfigError {
                message: "webhook endpoint is required outside dry-run mode".to_string(),
            });
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            dry_run,
        })
    }
}

#[async_trait]
impl Submitter for WebhookSubmitter {
    async fn submit(&self, payload: &Payload) -> Result<SubmissionOutcome> {
        let body = serde_json::to_vec(payload)?;

        if self.dry_run {
            tracing::info!(
                endpoint = self.endpoint.as_deref().unwrap_or("<none>"),
                semester_id = payload.semester.id,
                sections = payload.sections.len(),
                bytes = body.len(),
                "dry run: payload not sent"
            );
            return Ok(SubmissionOutcome::DryRun);
        }

        // Validation guarantees Some outside dry-run.
        let endpoint = self.endpoint.as_deref().ok_or_else(|| AppError::ConfigError {
            message: "webhook endpoint is required outside dry-run mode".to_string(),
        })?;

        tracing::info!(
            endpoint,
            semester_id = payload.semester.id,
            bytes = body.len(),
            "submitting payload"
        );

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::SubmissionFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "webhook accepted payload");
            Ok(SubmissionOutcome::Delivered {
                status: status.as_u16(),
            })
        } else if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            Err(AppError::ClientRejected {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(AppError::SubmissionFailed {
                reason: format!("server returned status {}", status.as_u16()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn sample_payload() -> Payload {
        let semester = serde_json::from_value(json!({
            "id": 401,
            "nameZh": "2024年秋季学期",
            "start": "2024-09-02",
            "end": "2025-01-19"
        }))
        .unwrap();
        let sections = serde_json::from_value(json!([
            { "id": 9001, "code": "MATH1001.01", "credits": 4.0 }
        ]))
        .unwrap();
        Payload { semester, sections }
    }

    #[tokio::test]
    async fn test_submit_success_on_2xx() {
        let server = MockServer::start();
        let webhook = server.mock(|when, then| {
            when.method(POST)
                .path("/hook")
                .header("Content-Type", "application/json")
                .json_body_partial(r#"{ "semester": { "id": 401 } }"#);
            then.status(201);
        });

        let submitter =
            WebhookSubmitter::new(Some(server.url("/hook")), Duration::from_secs(5), false)
                .unwrap();

        let outcome = submitter.submit(&sample_payload()).await.unwrap();

        webhook.assert();
        assert_eq!(outcome, SubmissionOutcome::Delivered { status: 201 });
    }

    #[tokio::test]
    async fn test_submit_4xx_is_client_rejected() {
        let server = MockServer::start();
        let webhook = server.mock(|when, then| {
            when.method(POST).path("/hook");
            then.status(422).body("bad semester");
        });

        let submitter =
            WebhookSubmitter::new(Some(server.url("/hook")), Duration::from_secs(5), false)
                .unwrap();

        let err = submitter.submit(&sample_payload()).await.unwrap_err();

        webhook.assert();
        assert!(
            matches!(err, AppError::ClientRejected { status: 422, ref body } if body == "bad semester")
        );
    }

    #[tokio::test]
    async fn test_submit_5xx_is_submission_failed() {
        let server = MockServer::start();
        let webhook = server.mock(|when, then| {
            when.method(POST).path("/hook");
            then.status(503);
        });

        let submitter =
            WebhookSubmitter::new(Some(server.url("/hook")), Duration::from_secs(5), false)
                .unwrap();

        let err = submitter.submit(&sample_payload()).await.unwrap_err();

        webhook.assert();
        assert!(matches!(err, AppError::SubmissionFailed { .. }));
    }

    #[tokio::test]
    async fn test_submit_connection_failure_is_submission_failed() {
        // Nothing listens on this port.
        let submitter = WebhookSubmitter::new(
            Some("http://127.0.0.1:1/hook".to_string()),
            Duration::from_secs(1),
            false,
        )
        .unwrap();

        let err = submitter.submit(&sample_payload()).await.unwrap_err();

        assert!(matches!(err, AppError::SubmissionFailed { .. }));
    }

    #[tokio::test]
    async fn test_dry_run_never_touches_the_network() {
        let server = MockServer::start();
        let webhook = server.mock(|when, then| {
            when.method(POST).path("/hook");
            then.status(200);
        });

        let submitter =
            WebhookSubmitter::new(Some(server.url("/hook")), Duration::from_secs(5), true)
                .unwrap();

        let outcome = submitter.submit(&sample_payload()).await.unwrap();

        assert_eq!(outcome, SubmissionOutcome::DryRun);
        webhook.assert_hits(0);
    }

    #[tokio::test]
    async fn test_dry_run_without_endpoint_is_allowed() {
        let submitter = WebhookSubmitter::new(None, Duration::from_secs(5), true).unwrap();
        let outcome = submitter.submit(&sample_payload()).await.unwrap();
        assert_eq!(outcome, SubmissionOutcome::DryRun);
    }

    #[test]
    fn test_missing_endpoint_outside_dry_run_is_rejected() {
        let err = WebhookSubmitter::new(None, Duration::from_secs(5), false).unwrap_err();
        assert!(matches!(err, AppError::ConfigError { .. }));
    }
}
