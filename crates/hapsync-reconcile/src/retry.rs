//! Conflict-retry orchestration.
//!
//! A mutation sequence (read version, open transaction, queue change, commit)
//! races with every other caller of the same document. Losing the race is a
//! transient condition: re-running the whole sequence reads a fresh version
//! that reflects the winner's commit. Every other failure is permanent and
//! propagates immediately.

use std::future::Future;
use std::time::Duration;

use hapsync_client::ClientError;

use crate::error::ReconcileError;

/// Delay schedule between conflict retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Same delay after every failed attempt.
    Fixed(Duration),
    /// Delay doubles per attempt, starting at `base` and capped at `max`.
    Exponential {
        /// Delay after the first failed attempt.
        base: Duration,
        /// Upper bound for the delay.
        max: Duration,
    },
}

/// Bounded retry policy for version conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first.
    pub max_attempts: u32,
    /// Delay schedule between attempts.
    pub backoff: Backoff,
}

impl RetryPolicy {
    /// A policy with a fixed delay between attempts.
    #[must_use]
    pub const fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            backoff: Backoff::Fixed(delay),
        }
    }

    /// Delay to sleep after the given failed attempt (1-based).
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed(delay) => delay,
            Backoff::Exponential { base, max } => {
                let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
                base.saturating_mul(factor).min(max)
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(250),
                max: Duration::from_secs(2),
            },
        }
    }
}

/// Run a full mutation sequence, re-executing it from scratch on conflict.
///
/// `operation` must contain the entire sequence including the version read;
/// retrying anything less would re-target the stale version. Non-conflict
/// errors are never retried.
///
/// # Errors
///
/// Returns `ReconcileError::RetriesExhausted` when every attempt conflicted,
/// or `ReconcileError::Client` for the first non-conflict failure.
pub async fn run_versioned<T, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, ReconcileError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_conflict() && attempt < max_attempts => {
                let delay = policy.delay(attempt);
                tracing::warn!(
                    attempt,
                    ?delay,
                    error = %err,
                    "version conflict, re-running mutation sequence"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) if err.is_conflict() => {
                return Err(ReconcileError::RetriesExhausted {
                    attempts: max_attempts,
                    source: err,
                });
            }
            Err(err) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::fixed(max_attempts, Duration::ZERO)
    }

    #[tokio::test]
    async fn first_attempt_success_is_returned() {
        let attempts = AtomicU32::new(0);
        let result = run_versioned(&fast_policy(3), || {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, ClientError>(7) }
        })
        .await
        .unwrap();

        assert_eq!(result, 7);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn conflict_then_success_is_transparent() {
        let attempts = AtomicU32::new(0);
        let result = run_versioned(&fast_policy(3), || {
            let n = attempts.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(ClientError::Conflict("version mismatch".to_string()))
                } else {
                    Ok("done")
                }
            }
        })
        .await
        .unwrap();

        assert_eq!(result, "done");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn exhausted_budget_surfaces_failure() {
        let attempts = AtomicU32::new(0);
        let result: Result<(), _> = run_versioned(&fast_policy(3), || {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(ClientError::Conflict("version mismatch".to_string())) }
        })
        .await;

        assert!(matches!(
            result,
            Err(ReconcileError::RetriesExhausted { attempts: 3, .. })
        ));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn non_conflict_errors_are_not_retried() {
        let attempts = AtomicU32::new(0);
        let result: Result<(), _> = run_versioned(&fast_policy(3), || {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(ClientError::Validation("bad payload".to_string())) }
        })
        .await;

        assert!(matches!(
            result,
            Err(ReconcileError::Client(ClientError::Validation(_)))
        ));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn zero_attempts_still_runs_once() {
        let attempts = AtomicU32::new(0);
        let result = run_versioned(&fast_policy(0), || {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, ClientError>(()) }
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn exponential_backoff_doubles_and_caps() {
        let policy = RetryPolicy {
            max_attempts: 5,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(250),
                max: Duration::from_secs(2),
            },
        };

        assert_eq!(policy.delay(1), Duration::from_millis(250));
        assert_eq!(policy.delay(2), Duration::from_millis(500));
        assert_eq!(policy.delay(3), Duration::from_secs(1));
        assert_eq!(policy.delay(4), Duration::from_secs(2));
        assert_eq!(policy.delay(10), Duration::from_secs(2));
    }

    #[test]
    fn fixed_backoff_is_constant() {
        let policy = RetryPolicy::fixed(3, Duration::from_millis(100));
        assert_eq!(policy.delay(1), Duration::from_millis(100));
        assert_eq!(policy.delay(3), Duration::from_millis(100));
    }
}
