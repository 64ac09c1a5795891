//! Chaotic stream generation.
//!
//! The stream starts at the seed and iterates a fixed nonlinear formula:
//!
//! ```text
//! s[0] = seed
//! s[i] = 0.432357 + (-0.498752 * cos(
//!          0.594808 * ( -4.10993 * cosh(s[i-1])
//!                        - (0.590558 + atanh(cos(
//!                             tan(cos(s[i-1] / -0.00153462)) + s[i-1]^2
//!                          ))) )
//!        ))
//! ```
//!
//! ## Reproducibility
//!
//! The formula is evaluated in exactly the grouping above, in `f64`, with no
//! algebraic simplification. The trajectory is highly sensitive to its input:
//! a one-ulp change in `s[i]` reaches the third decimal within a handful of
//! steps. Bit-exact output therefore also depends on the platform math
//! library's `cos`, `cosh`, `tan` and `atanh`, and is pinned by golden-vector
//! tests.
//!
//! `f64::atanh` is computed by std through `ln_1p` rather than by libm and
//! differs from it in the last ulp for a large share of inputs, so `atanh` is
//! bound directly from the system math library like the other three.
//!
//! ## Numerical hazards
//!
//! `cosh` overflows to infinity for `|s| > ~710` (a seed that large needs a
//! long or non-ASCII memorable password), after which the outer `cos` yields
//! NaN and NaN propagates through every later step. Nothing here guards
//! against it; [`try_generate_stream`] reports it, [`generate_stream`] keeps it.

use crate::traits::Recurrence;
use crate::types::{NumericDomainError, PipelineStage};

mod libm {
    extern "C" {
        #[link_name = "atanh"]
        fn c_atanh(x: f64) -> f64;
    }

    /// Inverse hyperbolic tangent from the platform math library.
    #[inline]
    pub(super) fn atanh(x: f64) -> f64 {
        // SAFETY: C99 `atanh` takes and returns a double by value and has no
        // preconditions; out-of-domain input yields NaN or infinity.
        unsafe { c_atanh(x) }
    }
}

/// Constant term of the recurrence.
pub const OFFSET: f64 = 0.432357;
/// Amplitude of the outer cosine.
pub const AMPLITUDE: f64 = -0.498752;
/// Scale applied inside the outer cosine.
pub const OUTER_SCALE: f64 = 0.594808;
/// Weight of the `cosh` term.
pub const COSH_WEIGHT: f64 = -4.10993;
/// Offset added to the `atanh` term.
pub const ATANH_OFFSET: f64 = 0.590558;
/// Divisor of the innermost cosine argument.
pub const INNER_DIVISOR: f64 = -0.00153462;

/// The evolved nonlinear recurrence used by the default generator.
///
/// # Examples
/// ```
/// use ecpass_core::math::recurrence::EcRecurrence;
/// use ecpass_core::traits::Recurrence;
///
/// let next = EcRecurrence.step(1.1484375);
/// assert!((next - 0.724714479047599).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EcRecurrence;

impl Recurrence for EcRecurrence {
    #[inline]
    fn step(&self, previous: f64) -> f64 {
        let x = previous;
        let wave = libm::atanh(((x / INNER_DIVISOR).cos().tan() + x * x).cos());
        OFFSET
            + (AMPLITUDE
                * (OUTER_SCALE * (COSH_WEIGHT * x.cosh() - (ATANH_OFFSET + wave))).cos())
    }

    fn name(&self) -> &'static str {
        "ec"
    }
}

/// Bounded iterator over a recurrence stream.
///
/// Yields `seed` first, then successive recurrence values, `length` items in
/// total. The recurrence is evaluated lazily and never one step past the end.
pub struct StreamIter<'a, R: Recurrence + ?Sized> {
    recurrence: &'a R,
    current: f64,
    remaining: usize,
}

impl<'a, R: Recurrence + ?Sized> StreamIter<'a, R> {
    /// Create a stream of `length` values starting at `seed`.
    pub fn new(recurrence: &'a R, seed: f64, length: usize) -> Self {
        Self {
            recurrence,
            current: seed,
            remaining: length,
        }
    }
}

impl<R: Recurrence + ?Sized> Iterator for StreamIter<'_, R> {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.current;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.current = self.recurrence.step(value);
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Recurrence + ?Sized> ExactSizeIterator for StreamIter<'_, R> {}

/// Generate the raw stream without any guard.
///
/// Non-finite values are kept as produced.
///
/// # Arguments
/// * `recurrence` - One-step map
/// * `seed` - First stream value
/// * `length` - Number of values (0 yields an empty stream)
///
/// # Examples
/// ```
/// use ecpass_core::math::recurrence::{generate_stream, EcRecurrence};
///
/// let stream = generate_stream(&EcRecurrence, 0.5, 10);
/// assert_eq!(stream.len(), 10);
/// assert_eq!(stream[0], 0.5);
/// ```
pub fn generate_stream<R: Recurrence + ?Sized>(
    recurrence: &R,
    seed: f64,
    length: usize,
) -> Vec<f64> {
    StreamIter::new(recurrence, seed, length).collect()
}

/// Generate the raw stream, stopping at the first non-finite value.
///
/// # Errors
/// Returns [`NumericDomainError`] with stage
/// [`PipelineStage::Recurrence`] and the index of the first NaN or infinite
/// value.
///
/// # Examples
/// ```
/// use ecpass_core::math::recurrence::{try_generate_stream, EcRecurrence};
///
/// // cosh(4000) overflows, so the second value is NaN
/// let err = try_generate_stream(&EcRecurrence, 4000.0, 4).unwrap_err();
/// assert_eq!(err.index, 1);
/// ```
pub fn try_generate_stream<R: Recurrence + ?Sized>(
    recurrence: &R,
    seed: f64,
    length: usize,
) -> Result<Vec<f64>, NumericDomainError> {
    let mut stream = Vec::with_capacity(length);
    for (index, value) in StreamIter::new(recurrence, seed, length).enumerate() {
        if !value.is_finite() {
            return Err(NumericDomainError::new(
                PipelineStage::Recurrence,
                index,
                value,
            ));
        }
        stream.push(value);
    }
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    impl Recurrence for Counting {
        fn step(&self, previous: f64) -> f64 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            previous + 1.0
        }
    }

    #[test]
    fn test_first_value_is_seed() {
        let stream = generate_stream(&EcRecurrence, 1.1484375, 3);
        assert_eq!(stream[0], 1.1484375);
    }

    #[test]
    fn test_first_steps_from_abc_seed() {
        let stream = generate_stream(&EcRecurrence, 1.1484375, 4);
        assert_relative_eq!(stream[1], 0.724714479047599, epsilon = 1e-12);
        assert_relative_eq!(stream[2], 0.843208600307769, epsilon = 1e-9);
    }

    #[test]
    fn test_values_stay_within_cosine_envelope() {
        // OFFSET ± |AMPLITUDE| bounds every finite step
        let lower = OFFSET + AMPLITUDE;
        let upper = OFFSET - AMPLITUDE;
        for value in generate_stream(&EcRecurrence, 2.75, 256).into_iter().skip(1) {
            assert!(value >= lower && value <= upper, "value {} escaped", value);
        }
    }

    #[test]
    fn test_zero_length() {
        assert!(generate_stream(&EcRecurrence, 0.5, 0).is_empty());
        assert!(try_generate_stream(&EcRecurrence, 0.5, 0).unwrap().is_empty());
    }

    #[test]
    fn test_single_length_does_not_step() {
        let counting = Counting::default();
        assert_eq!(generate_stream(&counting, 7.0, 1), vec![7.0]);
        assert_eq!(counting.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_steps_exactly_length_minus_one() {
        let counting = Counting::default();
        assert_eq!(
            generate_stream(&counting, 0.0, 5),
            vec![0.0, 1.0, 2.0, 3.0, 4.0]
        );
        assert_eq!(counting.calls.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn test_iterator_exact_size() {
        let iter = StreamIter::new(&EcRecurrence, 0.5, 12);
        assert_eq!(iter.len(), 12);
    }

    #[test]
    fn test_cosh_overflow_propagates_nan() {
        let stream = generate_stream(&EcRecurrence, 4351.99609375, 5);
        assert_eq!(stream[0], 4351.99609375);
        assert!(stream[1..].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_try_generate_reports_first_non_finite() {
        let err = try_generate_stream(&EcRecurrence, 4351.99609375, 5).unwrap_err();
        assert_eq!(err.stage, PipelineStage::Recurrence);
        assert_eq!(err.index, 1);
        assert!(err.value.is_nan());
    }

    #[test]
    fn test_try_generate_matches_unguarded_when_finite() {
        let guarded = try_generate_stream(&EcRecurrence, 0.46875, 64).unwrap();
        let unguarded = generate_stream(&EcRecurrence, 0.46875, 64);
        assert_eq!(guarded, unguarded);
    }

    #[test]
    fn test_infinite_seed_rejected_at_index_zero() {
        let err = try_generate_stream(&EcRecurrence, f64::INFINITY, 3).unwrap_err();
        assert_eq!(err.index, 0);
    }

    #[test]
    fn test_name() {
        assert_eq!(EcRecurrence.name(), "ec");
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn test_atanh_matches_system_libm() {
        // Inputs where the ln_1p formulation is one ulp off glibc.
        let cases = [
            (0xbfe7_2aab_a369_72a1_u64, 0xbfed_4f2b_4e4b_54ab_u64),
            (0xbf82_82ca_a21f_9440, 0xbf82_82eb_aba4_3da9),
            (0xbfb9_9a1a_a547_4e88, 0xbfb9_b016_2689_33f1),
        ];
        for (input, expected) in cases {
            let x = f64::from_bits(input);
            assert_eq!(libm::atanh(x).to_bits(), expected, "atanh({:e})", x);
        }
    }

    #[test]
    fn test_atanh_domain_edges() {
        assert_eq!(libm::atanh(0.0), 0.0);
        assert_eq!(libm::atanh(1.0), f64::INFINITY);
        assert_eq!(libm::atanh(-1.0), f64::NEG_INFINITY);
        assert!(libm::atanh(1.5).is_nan());
        assert!(libm::atanh(f64::NAN).is_nan());
    }
}
