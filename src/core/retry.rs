use crate::utils::error::{Result, ScrapeError};
use std::future::Future;

/// Runs `operation` up to `max_attempts` times, back to back.
///
/// Returns the first success. After the budget is spent the last error is
/// returned wrapped in [`ScrapeError::RetryExhausted`] with `identifier`
/// attached. A budget of zero still makes one attempt.
pub async fn retry<T, F, Fut>(identifier: &str, max_attempts: u32, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(identifier, attempt, "Succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) if attempt < max_attempts => {
                tracing::warn!(
                    identifier,
                    attempt,
                    max_attempts,
                    error = %e,
                    "Attempt failed, retrying"
                );
            }
            Err(e) => {
                tracing::error!(identifier, attempts = attempt, error = %e, "All retries failed");
                return Err(ScrapeError::RetryExhausted {
                    identifier: identifier.to_string(),
                    attempts: attempt,
                    source: Box::new(e),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tokio_test::{assert_err, assert_ok};

    fn flaky(calls: &Cell<u32>, failures: u32) -> Result<&'static str> {
        calls.set(calls.get() + 1);
        if calls.get() <= failures {
            Err(ScrapeError::SinkError {
                message: format!("failure {}", calls.get()),
            })
        } else {
            Ok("ok")
        }
    }

    #[tokio::test]
    async fn test_first_try_success() {
        let calls = Cell::new(0);
        let counter = &calls;
        let result = retry("op", 3, move || async move { flaky(counter, 0) }).await;
        assert_eq!(assert_ok!(result), "ok");
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_succeeds_after_k_failures() {
        for k in 0..3 {
            let calls = Cell::new(0);
            let counter = &calls;
            let result = retry("op", 3, move || async move { flaky(counter, k) }).await;
            assert_ok!(result);
            assert_eq!(calls.get(), k + 1);
        }
    }

    #[tokio::test]
    async fn test_exhaustion_returns_last_error() {
        let calls = Cell::new(0);
        let counter = &calls;
        let result =
            retry("http://localhost/menu", 3, move || async move { flaky(counter, u32::MAX) }).await;

        assert_eq!(calls.get(), 3);
        match assert_err!(result) {
            ScrapeError::RetryExhausted {
                identifier,
                attempts,
                source,
            } => {
                assert_eq!(identifier, "http://localhost/menu");
                assert_eq!(attempts, 3);
                assert_eq!(source.to_string(), "Sink error: failure 3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_zero_budget_still_attempts_once() {
        let calls = Cell::new(0);
        let counter = &calls;
        let result = retry("op", 0, move || async move { flaky(counter, u32::MAX) }).await;
        assert_err!(result);
        assert_eq!(calls.get(), 1);
    }
}
