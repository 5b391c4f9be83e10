//! Order-statistic selection
//!
//! Percentiles are taken as the element a full ascending sort would place
//! at `floor(p * (n - 1))`. The median is the element at `n / 2`, which for
//! even `n` is the upper of the two middle elements in zero-based terms and
//! is deliberately not averaged.
//!
//! Both functions use `select_nth_unstable_by` (expected O(n)) and leave the
//! slice partitioned around the selected index. Values are compared with
//! `f64::total_cmp`, so NaN never panics and sorts after every number.

use thiserror::Error;

/// Errors produced by statistics operations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StatsError {
    #[error("Cannot compute statistics of an empty sequence")]
    EmptyInput,

    #[error("Percentile must be within [0, 1], got {0}")]
    InvalidPercentile(f64),

    #[error("Minimum extent must be non-negative, got {0}")]
    InvalidMinExtent(f64),
}

/// Result type for statistics operations
pub type StatsResult<T> = Result<T, StatsError>;

/// Index of the `p` percentile in a sorted sequence of length `len`.
///
/// `len` must be non-zero and `p` within [0, 1].
pub fn percentile_index(len: usize, p: f64) -> usize {
    debug_assert!(len > 0);
    let idx = (p * (len - 1) as f64).floor() as usize;
    idx.min(len - 1)
}

/// Select the element at `index` as if `data` were sorted ascending.
///
/// After the call every element before `index` is <= the result and every
/// element after it is >=.
pub fn select_nth(data: &mut [f64], index: usize) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let (_, nth, _) = data.select_nth_unstable_by(index, f64::total_cmp);
    Ok(*nth)
}

/// Compute the `p` percentile of `data`, reordering it in place.
///
/// `p` is a fraction in [0, 1], not a percentage.
pub fn percentile(data: &mut [f64], p: f64) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(StatsError::InvalidPercentile(p));
    }
    select_nth(data, percentile_index(data.len(), p))
}

/// Compute the median of `data`, reordering it in place.
///
/// Returns the element at index `n / 2` of the sorted order.
pub fn median(data: &mut [f64]) -> StatsResult<f64> {
    let n = data.len();
    select_nth(data, n / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd() {
        let mut data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(median(&mut data), Ok(3.0));
    }

    #[test]
    fn test_median_even_takes_index_half() {
        // sorted: 1 2 3 4 -> index 2
        let mut data = vec![4.0, 1.0, 3.0, 2.0];
        assert_eq!(median(&mut data), Ok(3.0));
    }

    #[test]
    fn test_median_single() {
        let mut data = vec![7.5];
        assert_eq!(median(&mut data), Ok(7.5));
    }

    #[test]
    fn test_empty_rejected() {
        let mut data: Vec<f64> = Vec::new();
        assert_eq!(median(&mut data), Err(StatsError::EmptyInput));
        assert_eq!(percentile(&mut data, 0.5), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_percentile_bounds() {
        let mut data: Vec<f64> = (1..=100).rev().map(|x| x as f64).collect();
        assert_eq!(percentile(&mut data, 0.0), Ok(1.0));
        assert_eq!(percentile(&mut data, 1.0), Ok(100.0));
    }

    #[test]
    fn test_percentile_floor_index() {
        // 0.95 * 4 = 3.8 -> index 3
        let mut data = vec![100.0, 3.0, 0.0, 2.0, 1.0];
        assert_eq!(percentile_index(5, 0.95), 3);
        assert_eq!(percentile(&mut data, 0.95), Ok(3.0));
        assert_eq!(percentile(&mut data, 0.05), Ok(0.0));
    }

    #[test]
    fn test_percentile_rejects_out_of_range() {
        let mut data = vec![1.0, 2.0];
        assert_eq!(
            percentile(&mut data, 1.5),
            Err(StatsError::InvalidPercentile(1.5))
        );
        assert!(matches!(
            percentile(&mut data, f64::NAN),
            Err(StatsError::InvalidPercentile(_))
        ));
    }

    #[test]
    fn test_percentile_after_median_reorder() {
        let mut data = vec![9.0, -2.0, 4.0, 4.0, 0.0, 11.0, 6.0];
        let mut sorted = data.clone();
        sorted.sort_by(f64::total_cmp);

        assert_eq!(median(&mut data), Ok(sorted[3]));
        assert_eq!(percentile(&mut data, 0.05), Ok(sorted[0]));
        assert_eq!(percentile(&mut data, 0.95), Ok(sorted[5]));
    }

    #[test]
    fn test_selection_partitions_slice() {
        let mut data = vec![5.0, 8.0, 1.0, 9.0, 3.0, 7.0, 2.0];
        let idx = percentile_index(data.len(), 0.5);
        let value = percentile(&mut data, 0.5).unwrap();

        assert_eq!(data[idx], value);
        assert!(data[..idx].iter().all(|&v| v <= value));
        assert!(data[idx + 1..].iter().all(|&v| v >= value));
    }

    #[test]
    fn test_nan_does_not_panic() {
        let mut data = vec![f64::NAN, 1.0, 2.0];
        assert_eq!(median(&mut data), Ok(2.0));
        assert!(percentile(&mut data, 1.0).unwrap().is_nan());
    }
}
