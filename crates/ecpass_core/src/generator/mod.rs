//! Password generation orchestrator.
//!
//! [`PasswordGenerator`] validates a request, then runs the pipeline stages
//! in order:
//!
//! ```text
//! derive_seed ─▶ generate_stream ─▶ rank_normalize ─▶ map_stream
//! ```
//!
//! It performs no I/O. Persisting or displaying the result is the caller's
//! job.
//!
//! ## Logging
//!
//! Events are emitted through `tracing` at `debug`/`trace` level and never
//! include the memorable password or the seed derived from it.

pub mod batch;
pub mod config;

pub use batch::{BatchConfig, GenerationRequest, DEFAULT_PARALLEL_THRESHOLD};
pub use config::{GeneratorConfig, NumericPolicy, ParseNumericPolicyError};

use tracing::{debug, trace, warn};

use crate::math::charmap::map_stream;
use crate::math::rank::rank_normalize;
use crate::math::recurrence::{generate_stream, try_generate_stream, EcRecurrence};
use crate::math::seed::{derive_seed, memorable_len};
use crate::traits::Recurrence;
use crate::types::{GeneratorError, StrongPassword, ValidationError};

/// Every intermediate value of one pipeline run.
///
/// Used by inspection tooling; [`PasswordGenerator::generate`] keeps only
/// the password.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineTrace {
    /// Seed the stream started from
    pub seed: f64,
    /// Raw recurrence stream
    pub raw: Vec<f64>,
    /// Rank-normalised stream, index-aligned with `raw`
    pub uniform: Vec<f64>,
    /// Final password, index-aligned with `uniform`
    pub password: StrongPassword,
}

/// Deterministic strong-password generator.
///
/// An immutable value: the same `(memorable, length)` always yields the same
/// password, and one generator can be shared freely across threads.
///
/// # Type Parameters
///
/// * `R` - Recurrence driving the stream (default: [`EcRecurrence`])
///
/// # Example
///
/// ```
/// use ecpass_core::PasswordGenerator;
///
/// let generator = PasswordGenerator::new();
/// let first = generator.generate("hunter2", 24).unwrap();
/// let second = generator.generate("hunter2", 24).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(first.len(), 24);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator<R: Recurrence = EcRecurrence> {
    recurrence: R,
    config: GeneratorConfig,
}

impl PasswordGenerator<EcRecurrence> {
    /// Create a generator with the default recurrence and configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with the default recurrence.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            recurrence: EcRecurrence,
            config,
        }
    }
}

impl<R: Recurrence> PasswordGenerator<R> {
    /// Create a generator driven by a custom recurrence.
    pub fn with_recurrence(recurrence: R, config: GeneratorConfig) -> Self {
        Self { recurrence, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Active recurrence.
    pub fn recurrence(&self) -> &R {
        &self.recurrence
    }

    /// Check the request preconditions without doing any numeric work.
    ///
    /// # Errors
    /// - [`ValidationError::EmptyMemorable`] for an empty memorable password
    /// - [`ValidationError::LengthTooShort`] when `length` is below the
    ///   memorable password's character count
    pub fn validate(&self, memorable: &str, length: usize) -> Result<(), ValidationError> {
        let memorable_chars = memorable_len(memorable);
        if memorable_chars == 0 {
            return Err(ValidationError::EmptyMemorable);
        }
        if length < memorable_chars {
            return Err(ValidationError::LengthTooShort {
                requested: length,
                memorable: memorable_chars,
            });
        }
        Ok(())
    }

    /// Generate the strong password for `memorable`.
    ///
    /// # Errors
    /// - [`GeneratorError::Validation`] when the request fails [`validate`](Self::validate);
    ///   no numeric work is performed in that case
    /// - [`GeneratorError::NumericDomain`] when a non-finite value is met and
    ///   the numeric policy does not allow it
    pub fn generate(
        &self,
        memorable: &str,
        length: usize,
    ) -> Result<StrongPassword, GeneratorError> {
        self.trace(memorable, length).map(|trace| trace.password)
    }

    /// Generate the strong password and keep every intermediate stream.
    ///
    /// # Errors
    /// Same as [`generate`](Self::generate).
    pub fn trace(&self, memorable: &str, length: usize) -> Result<PipelineTrace, GeneratorError> {
        self.validate(memorable, length)?;
        debug!(
            length,
            memorable_len = memorable_len(memorable),
            policy = %self.config.numeric_policy,
            recurrence = self.recurrence.name(),
            "generating strong password"
        );
        self.trace_from_seed(derive_seed(memorable), length)
    }

    /// Run the numeric stages from an explicit seed.
    ///
    /// Skips memorable-password validation; `length == 0` yields empty streams.
    ///
    /// # Errors
    /// [`GeneratorError::NumericDomain`] as for [`generate`](Self::generate).
    pub fn trace_from_seed(
        &self,
        seed: f64,
        length: usize,
    ) -> Result<PipelineTrace, GeneratorError> {
        let raw = match self.config.numeric_policy {
            NumericPolicy::Strict => try_generate_stream(&self.recurrence, seed, length)?,
            NumericPolicy::Propagate => {
                let raw = generate_stream(&self.recurrence, seed, length);
                if let Some(index) = raw.iter().position(|v| !v.is_finite()) {
                    warn!(index, "non-finite value in raw stream, propagating");
                }
                raw
            }
        };
        trace!(len = raw.len(), "raw stream generated");

        let uniform = rank_normalize(&raw);
        trace!("stream rank-normalised");

        let password = StrongPassword::new(map_stream(&uniform)?);
        trace!("characters mapped");

        Ok(PipelineTrace {
            seed,
            raw,
            uniform,
            password,
        })
    }
}

/// Generate a strong password with the default generator.
///
/// # Examples
/// ```
/// use ecpass_core::generate;
///
/// assert_eq!(generate("x", 1).unwrap().as_str(), "!");
/// ```
pub fn generate(memorable: &str, length: usize) -> Result<StrongPassword, GeneratorError> {
    PasswordGenerator::new().generate(memorable, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NumericDomainError, PipelineStage};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts steps so tests can prove no numeric work happened.
    #[derive(Default)]
    struct CountingRecurrence {
        steps: AtomicUsize,
    }

    impl Recurrence for CountingRecurrence {
        fn step(&self, previous: f64) -> f64 {
            self.steps.fetch_add(1, Ordering::Relaxed);
            EcRecurrence.step(previous)
        }
    }

    /// Overflows to infinity after the first step.
    struct Exploding;

    impl Recurrence for Exploding {
        fn step(&self, previous: f64) -> f64 {
            previous * f64::MAX * 2.0
        }
    }

    #[test]
    fn test_validation_rejects_short_length() {
        let err = generate("password123", 5).unwrap_err();
        assert_eq!(
            err,
            GeneratorError::Validation(ValidationError::LengthTooShort {
                requested: 5,
                memorable: 11,
            })
        );
    }

    #[test]
    fn test_validation_happens_before_numeric_work() {
        let generator = PasswordGenerator::with_recurrence(
            CountingRecurrence::default(),
            GeneratorConfig::default(),
        );
        assert!(generator.generate("password123", 5).is_err());
        assert_eq!(generator.recurrence().steps.load(Ordering::Relaxed), 0);

        generator.generate("password123", 11).unwrap();
        assert_eq!(generator.recurrence().steps.load(Ordering::Relaxed), 10);
    }

    #[test]
    fn test_validation_rejects_empty_memorable() {
        let err = generate("", 8).unwrap_err();
        assert_eq!(err, GeneratorError::Validation(ValidationError::EmptyMemorable));
        assert!(generate("", 0).unwrap_err().is_validation());
    }

    #[test]
    fn test_length_equal_to_memorable_accepted() {
        assert_eq!(generate("abcdefgh", 8).unwrap().len(), 8);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 6 characters, 7 bytes
        assert_eq!(generate("Zürich", 6).unwrap().len(), 6);
    }

    #[test]
    fn test_single_length_uses_pinned_constant() {
        // uniform 0.0 maps to '!'
        assert_eq!(generate("x", 1).unwrap().as_str(), "!");
    }

    #[test]
    fn test_seed_is_largest_for_long_ascii_passwords() {
        // seed > 1 exceeds every recurrence value, so index 0 ranks last
        let trace = PasswordGenerator::new().trace("abc", 8).unwrap();
        assert_eq!(trace.seed, 1.1484375);
        assert_eq!(trace.uniform[0], 1.0);
        assert!(trace.password.as_str().starts_with(']'));
    }

    #[test]
    fn test_trace_streams_are_aligned() {
        let trace = PasswordGenerator::new().trace("correct horse", 24).unwrap();
        assert_eq!(trace.raw.len(), 24);
        assert_eq!(trace.uniform.len(), 24);
        assert_eq!(trace.password.len(), 24);
        assert_eq!(trace.raw[0], trace.seed);
    }

    #[test]
    fn test_strict_policy_rejects_overflow() {
        // U+10FFFF gives seed 4351.99..., cosh overflows on the first step
        let err = generate("\u{10FFFF}", 8).unwrap_err();
        match err {
            GeneratorError::NumericDomain(NumericDomainError { stage, index, value }) => {
                assert_eq!(stage, PipelineStage::Recurrence);
                assert_eq!(index, 1);
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_propagate_policy_ranks_nan_first() {
        let generator = PasswordGenerator::with_config(GeneratorConfig::propagate());
        let trace = generator.trace("\u{10FFFF}", 8).unwrap();
        assert!(trace.raw[1..].iter().all(|v| v.is_nan()));
        assert_eq!(trace.uniform[0], 1.0);
        assert_eq!(trace.uniform[1], 0.0);
        assert_eq!(trace.password.as_str(), "]!Q$U(Y,");
    }

    #[test]
    fn test_propagate_policy_with_infinite_stream() {
        let generator =
            PasswordGenerator::with_recurrence(Exploding, GeneratorConfig::propagate());
        let trace = generator.trace_from_seed(1.0, 3).unwrap();
        assert_eq!(trace.raw[1], f64::INFINITY);
        assert_eq!(trace.password.len(), 3);

        let strict = PasswordGenerator::with_recurrence(Exploding, GeneratorConfig::strict());
        let err = strict.trace_from_seed(1.0, 3).unwrap_err();
        assert!(err.is_numeric_domain());
    }

    #[test]
    fn test_trace_from_seed_zero_length() {
        let trace = PasswordGenerator::new().trace_from_seed(0.5, 0).unwrap();
        assert!(trace.raw.is_empty());
        assert!(trace.password.is_empty());
    }

    #[test]
    fn test_free_function_matches_generator() {
        assert_eq!(
            generate("myweakpass", 12).unwrap(),
            PasswordGenerator::new().generate("myweakpass", 12).unwrap()
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn memorable_strategy() -> impl Strategy<Value = String> {
            "[ -~]{1,24}"
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_determinism(memorable in memorable_strategy(), extra in 0usize..64) {
                let length = memorable.chars().count() + extra;
                let first = generate(&memorable, length).unwrap();
                let second = generate(&memorable, length).unwrap();
                prop_assert_eq!(first, second);
            }

            #[test]
            fn test_length_and_range_laws(memorable in memorable_strategy(), extra in 0usize..64) {
                let length = memorable.chars().count() + extra;
                let strong = generate(&memorable, length).unwrap();
                prop_assert_eq!(strong.len(), length);
                prop_assert!(strong.as_str().bytes().all(|b| (33..=126).contains(&b)));
            }

            #[test]
            fn test_precondition_law(memorable in memorable_strategy(), shortfall in 1usize..24) {
                let memorable_len = memorable.chars().count();
                prop_assume!(shortfall <= memorable_len);
                let err = generate(&memorable, memorable_len - shortfall).unwrap_err();
                prop_assert!(err.is_validation());
            }
        }
    }
}
