//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: Rejected requests, detected before any numeric work
//! - `NumericDomainError`: Non-finite values met inside the pipeline
//! - `GeneratorError`: The caller-visible union produced by the orchestrator
//!
//! Lower pipeline stages return `NumericDomainError` directly. Only
//! [`PasswordGenerator`](crate::generator::PasswordGenerator) wraps errors
//! into [`GeneratorError`].

use std::fmt;
use thiserror::Error;

/// Request validation failures.
///
/// This is the single validation failure kind exposed by the core. It is
/// always recoverable by the caller (ask for a longer length or a non-empty
/// memorable password).
///
/// # Examples
/// ```
/// use ecpass_core::types::ValidationError;
///
/// let err = ValidationError::LengthTooShort { requested: 5, memorable: 11 };
/// assert_eq!(
///     format!("{}", err),
///     "requested length must be at least the memorable password's length (requested 5, memorable 11)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Requested output length is shorter than the memorable password.
    #[error(
        "requested length must be at least the memorable password's length (requested {requested}, memorable {memorable})"
    )]
    LengthTooShort {
        /// Requested strong password length
        requested: usize,
        /// Memorable password length in characters
        memorable: usize,
    },

    /// Memorable password contains no characters.
    #[error("memorable password must not be empty")]
    EmptyMemorable,
}

/// Pipeline stage that produced or detected a numeric anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Chaotic recurrence iteration
    Recurrence,
    /// Uniform value to character mapping
    CharacterMapping,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Recurrence => write!(f, "recurrence"),
            PipelineStage::CharacterMapping => write!(f, "character mapping"),
        }
    }
}

/// Non-finite value (NaN or infinity) met inside the pipeline.
///
/// # Examples
/// ```
/// use ecpass_core::types::{NumericDomainError, PipelineStage};
///
/// let err = NumericDomainError::new(PipelineStage::Recurrence, 1, f64::NAN);
/// assert_eq!(format!("{}", err), "non-finite value NaN at index 1 during recurrence");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("non-finite value {value} at index {index} during {stage}")]
pub struct NumericDomainError {
    /// Stage that met the value
    pub stage: PipelineStage,
    /// Stream index of the offending value
    pub index: usize,
    /// The offending value
    pub value: f64,
}

impl NumericDomainError {
    /// Create a new numeric domain error.
    pub fn new(stage: PipelineStage, index: usize, value: f64) -> Self {
        Self {
            stage,
            index,
            value,
        }
    }
}

/// Errors surfaced by [`PasswordGenerator`](crate::generator::PasswordGenerator).
///
/// Every error is terminal for its request. The pipeline is deterministic, so
/// retrying with identical input reproduces the identical outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    /// Request rejected before any numeric work
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Non-finite value met during generation
    #[error("Numeric domain error: {0}")]
    NumericDomain(#[from] NumericDomainError),
}

impl GeneratorError {
    /// Returns `true` for request validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, GeneratorError::Validation(_))
    }

    /// Returns `true` for numeric domain failures.
    pub fn is_numeric_domain(&self) -> bool {
        matches!(self, GeneratorError::NumericDomain(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_length_too_short() {
        let err = ValidationError::LengthTooShort {
            requested: 5,
            memorable: 11,
        };
        assert!(err
            .to_string()
            .starts_with("requested length must be at least the memorable password's length"));
        assert!(err.to_string().contains("requested 5"));
        assert!(err.to_string().contains("memorable 11"));
    }

    #[test]
    fn test_display_empty_memorable() {
        let err = ValidationError::EmptyMemorable;
        assert_eq!(format!("{}", err), "memorable password must not be empty");
    }

    #[test]
    fn test_display_numeric_domain() {
        let err = NumericDomainError::new(PipelineStage::CharacterMapping, 3, f64::INFINITY);
        assert_eq!(
            format!("{}", err),
            "non-finite value inf at index 3 during character mapping"
        );
    }

    #[test]
    fn test_generator_error_from_validation() {
        let err: GeneratorError = ValidationError::EmptyMemorable.into();
        assert!(err.is_validation());
        assert!(!err.is_numeric_domain());
        assert_eq!(
            err.to_string(),
            "Validation error: memorable password must not be empty"
        );
    }

    #[test]
    fn test_generator_error_from_numeric_domain() {
        let err: GeneratorError =
            NumericDomainError::new(PipelineStage::Recurrence, 1, f64::NEG_INFINITY).into();
        assert!(err.is_numeric_domain());
        assert!(err.to_string().starts_with("Numeric domain error:"));
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(PipelineStage::Recurrence.to_string(), "recurrence");
        assert_eq!(
            PipelineStage::CharacterMapping.to_string(),
            "character mapping"
        );
    }

    #[test]
    fn test_stages_are_the_fallible_ones() {
        // Ranking is total over f64 and never reports a stage of its own
        let stages = [PipelineStage::Recurrence, PipelineStage::CharacterMapping];
        for stage in stages {
            match stage {
                PipelineStage::Recurrence | PipelineStage::CharacterMapping => {}
            }
        }
        let ranked = crate::math::rank::rank_normalize(&[f64::NAN, f64::INFINITY, 0.0]);
        assert!(ranked.iter().all(|u| u.is_finite()));
    }

    #[test]
    fn test_error_clone() {
        let err = ValidationError::LengthTooShort {
            requested: 1,
            memorable: 2,
        };
        assert_eq!(err.clone(), err);
    }
}
