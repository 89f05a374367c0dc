use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::api::ApiError;

pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// How long to wait after a rate-limit rejection before trying again
///
/// Retries are unbounded and the wait does not grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(backoff: Duration) -> Self {
        Self { backoff }
    }

    /// Retry without waiting
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BACKOFF)
    }
}

/// Run `op`, repeating it for as long as it is rate limited
///
/// Success and every error other than [`ApiError::RateLimited`] are returned as-is.
pub fn call_with_retry<T, F>(policy: &RetryPolicy, mut op: F) -> Result<T, ApiError>
where
    F: FnMut() -> Result<T, ApiError>,
{
    let mut attempts: u64 = 0;
    loop {
        match op() {
            Err(ApiError::RateLimited) => {
                attempts += 1;
                warn!(attempts, backoff_ms = policy.backoff.as_millis() as u64, "Rate limited, retrying");
                if !policy.backoff.is_zero() {
                    thread::sleep(policy.backoff);
                }
            }
            result => return result,
        }
    }
}
