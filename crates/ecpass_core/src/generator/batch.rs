//! Batch generation across independent requests.
//!
//! Requests share nothing, so large batches are spread over the rayon
//! thread pool. Small batches run sequentially to avoid task overhead.
//! Either way the output is index-aligned with the input and identical.

use rayon::prelude::*;

use super::PasswordGenerator;
use crate::traits::Recurrence;
use crate::types::{GeneratorError, StrongPassword};

/// Default batch size at which generation switches to rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 32;

/// One password generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Memorable password
    pub memorable: String,
    /// Requested strong password length
    pub length: usize,
}

impl GenerationRequest {
    /// Create a request.
    pub fn new(memorable: impl Into<String>, length: usize) -> Self {
        Self {
            memorable: memorable.into(),
            length,
        }
    }
}

/// Parallelisation settings for [`PasswordGenerator::generate_batch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BatchConfig {
    /// Minimum batch size processed in parallel.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl BatchConfig {
    /// Create a configuration with the given threshold.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Configuration that never parallelises.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Whether a batch of `n` requests should run on the thread pool.
    #[inline]
    pub fn should_parallelise(&self, n: usize) -> bool {
        n > 1 && n >= self.parallel_threshold
    }
}

impl<R: Recurrence> PasswordGenerator<R> {
    /// Generate one password per request, preserving request order.
    ///
    /// Each entry carries its own result; a failing request does not affect
    /// the others.
    ///
    /// # Examples
    /// ```
    /// use ecpass_core::{GenerationRequest, PasswordGenerator};
    ///
    /// let generator = PasswordGenerator::new();
    /// let results = generator.generate_batch(&[
    ///     GenerationRequest::new("abc", 12),
    ///     GenerationRequest::new("password123", 5),
    /// ]);
    /// assert_eq!(results[0].as_ref().unwrap().len(), 12);
    /// assert!(results[1].as_ref().unwrap_err().is_validation());
    /// ```
    pub fn generate_batch(
        &self,
        requests: &[GenerationRequest],
    ) -> Vec<Result<StrongPassword, GeneratorError>> {
        let run = |request: &GenerationRequest| self.generate(&request.memorable, request.length);

        if self.config().batch.should_parallelise(requests.len()) {
            tracing::debug!(requests = requests.len(), "generating batch in parallel");
            requests.par_iter().map(run).collect()
        } else {
            requests.iter().map(run).collect()
        }
    }
}
