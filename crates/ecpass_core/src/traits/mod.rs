//! Core traits for the password pipeline.
//!
//! This module defines:
//! - Generic floating-point operations (`Float` trait, used by rank ordering)
//! - One-step stream iteration (`Recurrence` trait)

/// Generic floating-point trait for numeric computations.
///
/// Re-exported so callers can rank `f32` or `f64` streams without naming
/// num-traits directly.
///
/// # Examples
/// ```
/// use ecpass_core::math::rank::ranks;
///
/// assert_eq!(ranks(&[0.3_f32, 0.1, 0.2]), vec![2, 0, 1]);
/// ```
pub use num_traits::Float;

pub mod recurrence;

pub use recurrence::Recurrence;
