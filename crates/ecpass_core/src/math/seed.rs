//! Seed derivation from the memorable password.

/// Divisor applied to every character code before summation.
pub const CODE_SCALE: f64 = 256.0;

/// Map a memorable password to the recurrence seed.
///
/// # Mathematical Definition
/// ```text
/// seed = Σ code(c) / 256      over every character c, left to right
/// ```
///
/// This is a sum, not an average, so the seed grows roughly linearly with
/// the password length. Codes are Unicode scalar values. The empty string
/// yields `0.0`.
///
/// # Examples
/// ```
/// use ecpass_core::math::seed::derive_seed;
///
/// assert_eq!(derive_seed("abc"), 1.1484375);
/// assert_eq!(derive_seed(""), 0.0);
/// ```
pub fn derive_seed(memorable: &str) -> f64 {
    // Running sum in iteration order; summation order is part of the output.
    memorable
        .chars()
        .fold(0.0, |acc, c| acc + f64::from(u32::from(c)) / CODE_SCALE)
}

/// Length of a memorable password, in the unit the seed iterates over.
///
/// # Examples
/// ```
/// use ecpass_core::math::seed::memorable_len;
///
/// assert_eq!(memorable_len("password123"), 11);
/// assert_eq!(memorable_len("Zürich"), 6);
/// ```
#[inline]
pub fn memorable_len(memorable: &str) -> usize {
    memorable.chars().count()
}
