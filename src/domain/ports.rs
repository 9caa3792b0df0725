use crate::domain::model::{Payload, SubmissionOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only access to the build cache. The filesystem implementation lives
/// in `core::cache`; tests use an in-memory map.
///
/// Implementations must report a missing file as `AppError::CacheMissing` so
/// callers can tell a sparse cache from a broken one.
pub trait CacheStore: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &Payload) -> Result<SubmissionOutcome>;
}
