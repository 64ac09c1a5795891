//! One-step recurrence abstraction.
//!
//! The stream generator only needs "next value from previous value". Keeping
//! that behind a trait lets the fixed formula in
//! [`EcRecurrence`](crate::math::recurrence::EcRecurrence) be swapped for
//! other candidate formulas when experimenting, and lets tests drive the
//! pipeline with simple, predictable maps.

/// Trait for scalar recurrences `s[i] = f(s[i - 1])`.
///
/// # Invariants
/// - `step` must be pure: the same input always yields the same bit pattern
/// - `step` must not clamp or repair non-finite results; the pipeline's
///   numeric policy decides what to do with them
///
/// # Examples
/// ```
/// use ecpass_core::traits::Recurrence;
/// use ecpass_core::math::recurrence::generate_stream;
///
/// struct Halving;
///
/// impl Recurrence for Halving {
///     fn step(&self, previous: f64) -> f64 {
///         previous / 2.0
///     }
/// }
///
/// assert_eq!(generate_stream(&Halving, 8.0, 4), vec![8.0, 4.0, 2.0, 1.0]);
/// ```
pub trait Recurrence: Send + Sync {
    /// Compute the next stream value from the previous one.
    fn step(&self, previous: f64) -> f64;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<R: Recurrence + ?Sized> Recurrence for &R {
    #[inline]
    fn step(&self, previous: f64) -> f64 {
        (**self).step(previous)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
