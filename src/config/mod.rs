use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  # Submit every cached semester
  catalog-webhook --webhook-url https://api.example.com/webhook

  # Submit from a custom cache location
  catalog-webhook --cache-root ./my-cache --webhook-url https://api.example.com/webhook

  # See what would be submitted without sending anything
  catalog-webhook --dry-run

  # Submit only specific semesters
  catalog-webhook --webhook-url https://api.example.com/webhook --semester-ids 401,402
";

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-webhook")]
#[command(about = "Submit cached course-catalog data to a webhook endpoint")]
#[command(after_help = EXAMPLES)]
pub struct CliConfig {
    /// Root directory of the build cache
    #[arg(long, default_value = "build/cache")]
    pub cache_root: PathBuf,

    /// Webhook endpoint to POST semester payloads to
    #[arg(long)]
    pub webhook_url: Option<String>,

    /// Restrict the run to these semester ids (default: all cached semesters)
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub semester_ids: Vec<i64>,

    /// Log the would-be payloads without performing any network call
    #[arg(long)]
    pub dry_run: bool,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// `None` means "all semesters"; an explicit empty list cannot occur
    /// because clap requires at least one value for the flag.
    pub fn requested_semester_ids(&self) -> Option<Vec<i64>> {
        if self.semester_ids.is_empty() {
            None
        } else {
            Some(self.semester_ids.clone())
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("cache_root", &self.cache_root.to_string_lossy())?;

        match &self.webhook_url {
            Some(url) => validate_url("webhook_url", url)?,
            None if !self.dry_run => {
                return Err(AppError::ConfigError {
                    message: "--webhook-url is required unless --dry-run is set".to_string(),
                })
            }
            None => {}
        }

        validate_positive_number("request_timeout_secs", self.request_timeout_secs, 1)?;
        Ok(())
    }
}
