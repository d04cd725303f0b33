// src/github/retry.rs
// =============================================================================
// Bounded retries for flaky remote calls.
//
// GitHub's GraphQL endpoint occasionally answers a large tree query with a
// 502 Bad Gateway. Those are worth retrying; a 401 or a malformed query is
// not. The policy here:
//
//   attempt 1 ──fail(transient)──> wait base_delay
//   attempt 2 ──fail(transient)──> wait base_delay * 2
//   attempt 3 ──fail──> give up, return the last error
//
// with max_retries = 2 (3 attempts total) by default. Callers that must not
// block the pipeline wrap the outcome in `or_fallback`.
// =============================================================================

use std::future::Future;
use std::time::Duration;

use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    // Extra attempts after the first one
    pub max_retries: u32,
    // Delay before the first retry; doubled for each retry after that
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(250),
        }
    }
}

impl RetryPolicy {
    // Retries back-to-back with no delay
    #[cfg(test)]
    pub fn immediate(max_retries: u32) -> Self {
        Self { max_retries, base_delay: Duration::ZERO }
    }

    fn delay_before_retry(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(retry))
    }
}

// Runs `operation` until it succeeds, fails with a non-transient error, or
// the retry budget is spent.
pub async fn retry_transient<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut retry = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && retry < policy.max_retries => {
                let delay = policy.delay_before_retry(retry);
                tracing::warn!(
                    attempt = retry + 1,
                    max_attempts = policy.max_retries + 1,
                    delay_ms = delay.as_millis() as u64,
                    "Transient failure, retrying: {}",
                    e
                );
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                retry += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

// Collapses a failed fetch into `fallback`, logging the error.
pub fn or_fallback<T>(outcome: Result<T>, fallback: T) -> T {
    match outcome {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Falling back to default result: {}", e);
            fallback
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `operation` an FnMut() -> Fut and not a future?
//    - A future can only be awaited once
//    - To try again we need a fresh future, so we take a closure that builds one
//    - FnMut (not Fn) lets the closure update state it captured, like a counter
//
// 2. What does `Err(e) if ... =>` mean?
//    - A match guard: the arm only matches when the condition is also true
//    - Non-transient errors skip this arm and fall through to `Err(e) => return Err(e)`
//
// 3. Why saturating_mul / saturating_pow?
//    - Plain multiplication panics on overflow in debug builds
//    - The saturating versions stop at the maximum value instead
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CookbookError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn bad_gateway() -> CookbookError {
        CookbookError::Api { status: 502, message: "Bad Gateway".to_string() }
    }

    #[tokio::test]
    async fn test_succeeds_on_third_attempt() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::immediate(2);

        let result = retry_transient(&policy, || async {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            if n < 3 {
                Err(bad_gateway())
            } else {
                Ok("done")
            }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_budget() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::immediate(2);

        let result: Result<()> = retry_transient(&policy, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(bad_gateway())
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(or_fallback(result.map(|_| 1), 0), 0);
    }

    #[tokio::test]
    async fn test_non_transient_error_is_not_retried() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::immediate(2);

        let result: Result<()> = retry_transient(&policy, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(CookbookError::Api { status: 401, message: "Bad credentials".to_string() })
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_backoff_doubles_between_retries() {
        let policy = RetryPolicy { max_retries: 2, base_delay: Duration::from_millis(100) };
        assert_eq!(policy.delay_before_retry(0), Duration::from_millis(100));
        assert_eq!(policy.delay_before_retry(1), Duration::from_millis(200));
        assert_eq!(RetryPolicy::immediate(2).delay_before_retry(1), Duration::ZERO);
    }
}
