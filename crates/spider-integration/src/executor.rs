//! Bounded offload pool for blocking vendor calls.
//!
//! The Spider connector authenticates with a blocking HTTP client; running
//! it on the async scheduler would stall every other entry being processed.
//! The lifecycle manager pushes such calls through this pool instead and
//! awaits the result.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task;

/// Jobs allowed in flight when no limit is given.
const DEFAULT_LIMIT: usize = 8;

/// An offloaded job died before producing a result.
#[derive(Debug, Error)]
#[error("blocking job failed: {0}")]
pub struct OffloadError(String);

/// Bounded pool of blocking jobs backed by the runtime's blocking threads.
#[derive(Clone)]
pub struct BlockingPool {
    permits: Arc<Semaphore>,
}

impl BlockingPool {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }

    /// Pool admitting at most `limit` concurrent jobs.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(limit)),
        }
    }

    /// Run `job` on a blocking thread and await its result.
    pub async fn run<F, T>(&self, job: F) -> Result<T, OffloadError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|err| OffloadError(err.to_string()))?;

        task::spawn_blocking(job)
            .await
            .map_err(|err| OffloadError(err.to_string()))
    }
}

impl Default for BlockingPool {
    fn default() -> Self {
        Self::new()
    }
}
