//! Core types for the password pipeline.
//!
//! This module provides:
//! - [`StrongPassword`]: The printable-ASCII output of the pipeline
//! - Error types: [`ValidationError`], [`NumericDomainError`], [`GeneratorError`]

pub mod error;
pub mod password;

pub use error::{GeneratorError, NumericDomainError, PipelineStage, ValidationError};
pub use password::StrongPassword;
