//! Retry execution for flaky operations
//!
//! The posture-collection path never retries; this helper exists for the
//! demo pipelines that wrap genuinely fallible work (ETL runs).

use std::future::Future;
use std::time::Duration;

/// Retry configuration for pipeline operations
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first
    pub max_attempts: u32,

    /// Delay before the second attempt
    pub initial_delay: Duration,

    /// Upper bound on the delay between attempts
    pub max_delay: Duration,

    /// Multiplier applied to the delay after each failed attempt
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Fixed-delay schedule: the same pause between every attempt
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay: delay,
            max_delay: delay,
            backoff_multiplier: 1.0,
        }
    }
}

/// Run `op` until it succeeds or `max_attempts` is exhausted.
///
/// Sleeps between attempts with capped exponential backoff and returns the
/// last error once every attempt has failed.
pub async fn run_with_retries<T, E, F, Fut>(config: &RetryConfig, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = config.max_attempts.max(1);
    let mut delay = config.initial_delay;
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!("Succeeded on attempt {}/{}", attempt, max_attempts);
                }
                return Ok(value);
            }
            Err(err) if attempt >= max_attempts => {
                tracing::warn!("Attempt {}/{} failed: {}; giving up", attempt, max_attempts, err);
                return Err(err);
            }
            Err(err) => {
                tracing::warn!(
                    "Attempt {}/{} failed: {}; retrying in {:?}",
                    attempt,
                    max_attempts,
                    err,
                    delay
                );
                tokio::time::sleep(delay).await;
                let next = delay.as_secs_f64() * config.backoff_multiplier;
                delay = Duration::from_secs_f64(next.min(config.max_delay.as_secs_f64()));
                attempt += 1;
            }
        }
    }
}
