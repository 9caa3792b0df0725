use catalog_webhook::utils::{logger, validation::Validate};
use catalog_webhook::{CacheReader, CliConfig, LocalCache, Orchestrator, WebhookSubmitter};
use clap::Parser;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting catalog-webhook");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    tracing::info!("Using cache root: {}", config.cache_root.display());

    let submitter = match WebhookSubmitter::new(
        config.webhook_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
        config.dry_run,
    ) {
        Ok(submitter) => submitter,
        Err(e) => {
            tracing::error!("Failed to build webhook client: {}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let reader = CacheReader::new(LocalCache::new(config.cache_root.clone()));
    let orchestrator = Orchestrator::new(reader, submitter, config.requested_semester_ids());

    match orchestrator.run().await {
        Ok(summary) => {
            if summary.all_succeeded() {
                println!(
                    "Submission complete: {} succeeded, {} skipped",
                    summary.succeeded(),
                    summary.skipped()
                );
            } else {
                eprintln!(
                    "Submission finished with failures: {} succeeded, {} failed, {} skipped",
                    summary.succeeded(),
                    summary.failed(),
                    summary.skipped()
                );
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("Run aborted: {}", e);
            eprintln!("{}", e);
            std::process::exit(if e.is_config_error() { 2 } else { 1 });
        }
    }
}
