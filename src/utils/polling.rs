use std::{fmt::Display, future::Future, time::Duration};

use log::{debug, warn};

/// Polls until `check` yields a value or the timeout is reached.
///
/// # Arguments
/// * `check` - Closure returning `Ok(Some(_))` when done, `Ok(None)` to keep polling
/// * `max_wait` - Maximum time to wait before giving up
/// * `poll_interval` - Time to sleep between polls
/// * `operation_name` - Name of the operation for logging
///
/// # Returns
/// * `Some(value)` - Condition was met within timeout
/// * `None` - Timeout reached (errors are logged and polling continues)
pub async fn poll_until<T, E, F, Fut>(
    check: F,
    max_wait: Duration,
    poll_interval: Duration,
    operation_name: &str,
) -> Option<T>
where
    E: Display,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    let start = std::time::Instant::now();

    loop {
        match check().await {
            Ok(Some(value)) => {
                debug!("{} completed", operation_name);
                return Some(value);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Error checking {} status while waiting: {}", operation_name, e);
            }
        }

        if start.elapsed() > max_wait {
            warn!("Timed out waiting for {}", operation_name);
            return None;
        }

        tokio::time::sleep(poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_poll_until_condition_met_immediately() {
        let result = poll_until(
            || async { Ok::<_, String>(Some(42)) },
            Duration::from_millis(100),
            Duration::from_millis(10),
            "immediate_test",
        )
        .await;

        assert_eq!(result, Some(42));
    }

    #[tokio::test]
    async fn test_poll_until_condition_met_after_multiple_polls() {
        let poll_count = Arc::new(AtomicU32::new(0));
        let poll_count_clone = Arc::clone(&poll_count);

        let result = poll_until(
            move || {
                let count = Arc::clone(&poll_count_clone);
                async move {
                    let current = count.fetch_add(1, Ordering::SeqCst) + 1;
                    Ok::<_, String>((current >= 3).then_some(current))
                }
            },
            Duration::from_secs(1),
            Duration::from_millis(10),
            "multi_poll_test",
        )
        .await;

        assert_eq!(result, Some(3));
        assert_eq!(poll_count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_poll_until_timeout() {
        let result = poll_until(
            || async { Ok::<Option<u32>, String>(None) },
            Duration::from_millis(50),
            Duration::from_millis(10),
            "timeout_test",
        )
        .await;

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_poll_until_continues_on_error() {
        let poll_count = Arc::new(AtomicU32::new(0));
        let poll_count_clone = Arc::clone(&poll_count);

        let result = poll_until(
            move || {
                let count = Arc::clone(&poll_count_clone);
                async move {
                    let current = count.fetch_add(1, Ordering::SeqCst) + 1;
                    if current < 3 {
                        Err("temporary failure".to_string())
                    } else {
                        Ok(Some(current))
                    }
                }
            },
            Duration::from_secs(1),
            Duration::from_millis(10),
            "error_recovery_test",
        )
        .await;

        assert_eq!(result, Some(3));
    }
}
