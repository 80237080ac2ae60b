//! Guarded statistical reducers for the aggregation engine
//!
//! The empty-sequence and small-sample behaviour here is a contract, not
//! a convenience: every reducer returns 0 instead of NaN or an error so
//! that an address with no activity on one side still produces a full
//! all-zero metrics record.

/// Arithmetic mean, defined as 0.0 for an empty sequence.
///
/// # Examples
/// ```
/// use btc_address_analyser::utils::math::mean;
///
/// assert_eq!(mean(&[3.0, 5.0, 7.0]), 5.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Maximum, defined as 0.0 for an empty sequence.
pub fn max_of(values: &[f64]) -> f64 {
    match values.iter().copied().reduce(f64::max) {
        Some(max) => max,
        None => 0.0,
    }
}

/// Minimum, defined as 0.0 for an empty sequence.
pub fn min_of(values: &[f64]) -> f64 {
    match values.iter().copied().reduce(f64::min) {
        Some(min) => min,
        None => 0.0,
    }
}

/// Population standard deviation (divisor N, not N-1).
///
/// Defined as 0.0 for fewer than 2 samples, including the empty case.
///
/// # Examples
/// ```
/// use btc_address_analyser::utils::math::population_std_dev;
///
/// assert_eq!(population_std_dev(&[2.0, 2.0, 2.0, 2.0]), 0.0);
/// assert_eq!(population_std_dev(&[42.0]), 0.0);
/// assert_eq!(population_std_dev(&[]), 0.0);
/// ```
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Division returning 0.0 when the denominator is zero.
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[3.0, 5.0, 7.0]), 5.0);
        assert_eq!(mean(&[1.5]), 1.5);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_max_min_empty_are_zero() {
        assert_eq!(max_of(&[]), 0.0);
        assert_eq!(min_of(&[]), 0.0);
    }

    #[test]
    fn test_max_min_normal() {
        let values = [2.0, 9.0, 4.0];
        assert_eq!(max_of(&values), 9.0);
        assert_eq!(min_of(&values), 2.0);

        // Per-transaction counts can legitimately be zero
        let with_zero = [0.0, 3.0];
        assert_eq!(min_of(&with_zero), 0.0);
        assert_eq!(max_of(&with_zero), 3.0);
    }

    #[test]
    fn test_population_std_dev_uses_n_divisor() {
        // Population std-dev of [2, 4]: mean 3, variance ((1+1)/2) = 1
        assert_eq!(population_std_dev(&[2.0, 4.0]), 1.0);

        // Sample std-dev would give sqrt(2) here; make sure we don't
        let sample = ((2.0f64 - 3.0).powi(2) + (4.0f64 - 3.0).powi(2)) / 1.0;
        assert_ne!(population_std_dev(&[2.0, 4.0]), sample.sqrt());
    }

    #[test]
    fn test_population_std_dev_small_samples() {
        assert_eq!(population_std_dev(&[]), 0.0);
        assert_eq!(population_std_dev(&[42.0]), 0.0);
        assert_eq!(population_std_dev(&[2.0, 2.0, 2.0, 2.0]), 0.0);
    }

    #[test]
    fn test_safe_div() {
        assert_eq!(safe_div(3.0, 2.0), 1.5);
        assert_eq!(safe_div(3.0, 0.0), 0.0);
        assert_eq!(safe_div(0.0, 0.0), 0.0);
    }
}
