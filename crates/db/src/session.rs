//! Scoped connection and transaction acquisition.
//!
//! Repositories never reach for a global session: every call receives an
//! explicit `&mut PgConnection`, obtained here either as a pooled
//! connection (reads) or an open transaction (writes). Both are returned to
//! the pool when dropped; an uncommitted transaction is rolled back on drop.
//!
//! Acquisition is the only place that retries, and only for
//! connection-class failures (see [`is_connection_error`]).

use std::future::Future;
use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::{Postgres, Transaction};

use crate::DbPool;

/// Tunable parameters for the exponential-backoff retry strategy.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts including the first one. `1` disables retrying.
    pub max_attempts: u32,
    /// Delay before the second attempt.
    pub initial_delay: Duration,
    /// Upper bound on the delay between attempts.
    pub max_delay: Duration,
    /// Factor by which the delay grows after each failure.
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// A policy that makes exactly one attempt.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }
}

/// Calculate the next backoff delay, clamped to [`RetryPolicy::max_delay`].
pub fn next_delay(current: Duration, policy: &RetryPolicy) -> Duration {
    let next_ms = (current.as_millis() as f64 * policy.multiplier) as u64;
    Duration::from_millis(next_ms).min(policy.max_delay)
}

/// Whether `err` means the database could not be reached, as opposed to
/// the database rejecting the statement.
pub fn is_connection_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolTimedOut
    )
}

/// Run `op` until it succeeds, fails with a non-connection error, or the
/// policy's attempts are exhausted.
pub async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    operation: &'static str,
    mut op: F,
) -> Result<T, sqlx::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    let mut delay = policy.initial_delay;
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if is_connection_error(&err) && attempt < policy.max_attempts => {
                tracing::warn!(
                    operation,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Database connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay = next_delay(delay, policy);
            }
            Err(err) => return Err(err),
        }
    }
}

/// Check out a pooled connection for read-only work.
pub async fn acquire(
    pool: &DbPool,
    policy: &RetryPolicy,
) -> Result<PoolConnection<Postgres>, sqlx::Error> {
    with_retry(policy, "acquire", || pool.acquire()).await
}

/// Open a transaction for a write path. Commit explicitly on success.
pub async fn begin(
    pool: &DbPool,
    policy: &RetryPolicy,
) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    with_retry(policy, "begin", || pool.begin()).await
}
