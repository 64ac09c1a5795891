//! Rank-based (order-statistic) normalisation.
//!
//! Each stream entry is replaced by the position it would occupy in an
//! ascending stable sort, scaled into [0, 1]:
//!
//! ```text
//! u[i] = rank(i) / (n - 1)
//! ```
//!
//! The output is always a permutation of `{0/(n-1), 1/(n-1), …, 1}`,
//! whatever the distribution of the raw values, so clustered or skewed
//! recurrence output still maps to a uniform spread.
//!
//! ## Ordering
//!
//! Equal values keep their original index order (the earlier entry gets the
//! lower rank). NaN, which only appears when non-finite values are allowed
//! through, orders below every number and equal to other NaNs, so ranks are
//! always a deterministic permutation.

use num_traits::Float;
use std::cmp::Ordering;

/// Uniform value assigned to the only element of a one-element stream.
///
/// `rank / (n - 1)` is `0 / 0` for `n == 1`; the pipeline pins it to this
/// constant instead of producing NaN.
pub const SINGLE_ELEMENT_UNIFORM: f64 = 0.0;

/// Total order used for ranking: NaN first, then ascending by value.
///
/// # Examples
/// ```
/// use ecpass_core::math::rank::stream_order;
/// use std::cmp::Ordering;
///
/// assert_eq!(stream_order(f64::NAN, f64::NEG_INFINITY), Ordering::Less);
/// assert_eq!(stream_order(1.0, 2.0), Ordering::Less);
/// assert_eq!(stream_order(-0.0, 0.0), Ordering::Equal);
/// ```
#[inline]
pub fn stream_order<T: Float>(a: T, b: T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// 0-based rank of every entry under a stable ascending sort.
///
/// # Examples
/// ```
/// use ecpass_core::math::rank::ranks;
///
/// // Ties broken by original index
/// assert_eq!(ranks(&[0.5, 0.1, 0.5, 0.1]), vec![2, 0, 3, 1]);
/// ```
pub fn ranks<T: Float>(values: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    // sort_by is stable, which gives the index tie-break
    order.sort_by(|&a, &b| stream_order(values[a], values[b]));

    let mut ranks = vec![0; values.len()];
    for (rank, &index) in order.iter().enumerate() {
        ranks[index] = rank;
    }
    ranks
}

/// Normalise a raw stream to uniform values on [0, 1] by rank.
///
/// The output is index-aligned with the input (not sorted).
///
/// # Edge Cases
/// - Empty input yields an empty output
/// - A single element yields [`SINGLE_ELEMENT_UNIFORM`]
///
/// # Examples
/// ```
/// use ecpass_core::math::rank::rank_normalize;
///
/// assert_eq!(rank_normalize(&[9.0, -3.0, 4.0]), vec![1.0, 0.0, 0.5]);
/// assert_eq!(rank_normalize(&[42.0]), vec![0.0]);
/// ```
pub fn rank_normalize(values: &[f64]) -> Vec<f64> {
    match values.len() {
        0 => Vec::new(),
        1 => vec![SINGLE_ELEMENT_UNIFORM],
        n => {
            let denominator = (n - 1) as f64;
            ranks(values)
                .into_iter()
                .map(|rank| rank as f64 / denominator)
                .collect()
        }
    }
}
