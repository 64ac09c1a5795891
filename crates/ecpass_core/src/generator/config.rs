//! Generator configuration types.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::batch::BatchConfig;

/// Error returned when a numeric policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid numeric policy: {0}. Must be one of: strict, propagate")]
pub struct ParseNumericPolicyError(pub String);

/// What the pipeline does with NaN or infinite intermediate values.
///
/// The recurrence can overflow (`cosh` of a large seed) and then yields NaN
/// for every later step.
///
/// - `Strict` (default): reject the request with
///   [`NumericDomainError`](crate::types::NumericDomainError) at the first
///   non-finite raw value.
/// - `Propagate`: keep non-finite raw values in the stream.
///   Rank normalisation orders NaN below every number, so the uniform stream
///   stays finite and a password is still produced. A non-finite value that
///   reaches the character mapper is still rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumericPolicy {
    /// Fail fast on the first non-finite raw value
    #[default]
    Strict,
    /// Let non-finite raw values flow through normalisation
    Propagate,
}

impl NumericPolicy {
    /// Lowercase name, as accepted by `from_str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericPolicy::Strict => "strict",
            NumericPolicy::Propagate => "propagate",
        }
    }
}

impl FromStr for NumericPolicy {
    type Err = ParseNumericPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(NumericPolicy::Strict),
            "propagate" | "nan" => Ok(NumericPolicy::Propagate),
            _ => Err(ParseNumericPolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for NumericPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`PasswordGenerator`](super::PasswordGenerator).
///
/// # Example
///
/// ```
/// use ecpass_core::{GeneratorConfig, NumericPolicy};
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.numeric_policy, NumericPolicy::Strict);
///
/// let lenient = GeneratorConfig::propagate();
/// assert_eq!(lenient.numeric_policy, NumericPolicy::Propagate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Handling of non-finite intermediate values.
    pub numeric_policy: NumericPolicy,

    /// Batch generation settings.
    pub batch: BatchConfig,
}

impl GeneratorConfig {
    /// Create a configuration with the given policy and default batch settings.
    pub fn new(numeric_policy: NumericPolicy) -> Self {
        Self {
            numeric_policy,
            batch: BatchConfig::default(),
        }
    }

    /// Configuration that rejects non-finite values.
    pub fn strict() -> Self {
        Self::new(NumericPolicy::Strict)
    }

    /// Configuration that lets non-finite values through.
    pub fn propagate() -> Self {
        Self::new(NumericPolicy::Propagate)
    }

    /// Replace the batch settings.
    pub fn with_batch(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }
}
