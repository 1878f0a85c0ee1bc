//! Retry with exponential backoff around a label generator.

use std::time::Duration;

use ize_core::errors::LabelError;
use ize_core::models::ClusterStats;
use ize_core::traits::ILabelGenerator;

/// Retries retryable failures up to `max_retries` times, sleeping
/// `initial_backoff * 2^(attempt - 1)` before each retry. Permanent
/// failures return immediately.
pub struct RetryingLabelGenerator<G> {
    inner: G,
    max_retries: u32,
    initial_backoff: Duration,
}

impl<G: ILabelGenerator> RetryingLabelGenerator<G> {
    pub fn new(inner: G, max_retries: u32, initial_backoff: Duration) -> Self {
        Self {
            inner,
            max_retries,
            initial_backoff,
        }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Delay before retry number `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
        self.initial_backoff.saturating_mul(factor)
    }
}

impl<G: ILabelGenerator> ILabelGenerator for RetryingLabelGenerator<G> {
    fn generate(&self, stats: &ClusterStats) -> Result<String, LabelError> {
        let mut attempt = 0u32;
        loop {
            if attempt > 0 {
                let delay = self.backoff(attempt);
                tracing::debug!(
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    "retrying label request"
                );
                std::thread::sleep(delay);
            }

            match self.inner.generate(stats) {
                Ok(label) => return Ok(label),
                Err(error) if !error.is_retryable() => {
                    tracing::warn!(%error, "label provider returned non-retryable error");
                    return Err(error);
                }
                Err(error) if attempt >= self.max_retries => {
                    tracing::warn!(attempts = attempt + 1, %error, "label request failed after retries");
                    return Err(error);
                }
                Err(error) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_retries = self.max_retries,
                        %error,
                        "label request failed, will retry"
                    );
                }
            }
            attempt += 1;
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}
