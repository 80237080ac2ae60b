//! Retry delay helpers for explorer API requests
//!
//! The explorer enforces request pacing rather than authentication, so
//! the retry policy is a linearly growing delay from the configured base,
//! capped at a maximum.

use std::time::Duration;

/// Delay before retry attempt `attempt` (1-based), growing linearly
/// from `base_delay` and capped at `max_delay_seconds`.
///
/// `new_delay = min(base_delay * (attempt + 1), max_delay)`
///
/// # Example
/// ```
/// use std::time::Duration;
/// use btc_address_analyser::api::retry_delay;
///
/// let base = Duration::from_secs(1);
/// assert_eq!(retry_delay(base, 1, 30), Duration::from_secs(2));
/// assert_eq!(retry_delay(base, 4, 30), Duration::from_secs(5));
/// ```
pub fn retry_delay(base_delay: Duration, attempt: usize, max_delay_seconds: u64) -> Duration {
    base_delay
        .saturating_mul(attempt.saturating_add(1).min(u32::MAX as usize) as u32)
        .min(Duration::from_secs(max_delay_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_growth() {
        let base = Duration::from_millis(1000);
        assert_eq!(retry_delay(base, 1, 30), Duration::from_millis(2000));
        assert_eq!(retry_delay(base, 2, 30), Duration::from_millis(3000));
        assert_eq!(retry_delay(base, 9, 30), Duration::from_millis(10000));
    }

    #[test]
    fn test_capped_at_max() {
        let base = Duration::from_secs(10);
        assert_eq!(retry_delay(base, 5, 30), Duration::from_secs(30));

        let large_base = Duration::from_secs(60);
        assert_eq!(retry_delay(large_base, 1, 30), Duration::from_secs(30));
    }

    #[test]
    fn test_sub_second_base() {
        let base = Duration::from_millis(250);
        assert_eq!(retry_delay(base, 1, 30), Duration::from_millis(500));
        assert_eq!(retry_delay(base, 3, 30), Duration::from_millis(1000));
    }
}
