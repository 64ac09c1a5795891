//! Uniform value to printable ASCII mapping.
//!
//! ```text
//! code = floor(|v * 1000| mod 94) + 33
//! ```
//!
//! The result always lies in `[33, 126]`, `'!'` through `'~'`: the 94
//! printable, non-space ASCII symbols. `mod` is the IEEE remainder of `%`
//! and the conversion truncates with `floor`, never rounds.

use crate::types::{NumericDomainError, PipelineStage};

/// First printable code (`'!'`).
pub const PRINTABLE_START: u8 = 33;
/// Last printable code (`'~'`).
pub const PRINTABLE_END: u8 = 126;
/// Number of printable codes.
pub const PRINTABLE_RANGE: u8 = PRINTABLE_END - PRINTABLE_START + 1;
/// Multiplier applied to the uniform value before the modulo.
pub const UNIFORM_SCALE: f64 = 1000.0;

/// Map one uniform value to a printable character.
///
/// # Errors
/// Returns [`NumericDomainError`] (stage
/// [`PipelineStage::CharacterMapping`], index 0) when `v` or `v * 1000` is
/// NaN or infinite, since no character code is defined for it.
///
/// # Examples
/// ```
/// use ecpass_core::math::charmap::map_to_char;
///
/// assert_eq!(map_to_char(0.0).unwrap(), '!');
/// assert_eq!(map_to_char(1.0).unwrap(), ']'); // 1000 mod 94 = 60
/// assert!(map_to_char(f64::NAN).is_err());
/// ```
pub fn map_to_char(v: f64) -> Result<char, NumericDomainError> {
    let scaled = v * UNIFORM_SCALE;
    if !scaled.is_finite() {
        return Err(NumericDomainError::new(
            PipelineStage::CharacterMapping,
            0,
            v,
        ));
    }
    let offset = (scaled.abs() % f64::from(PRINTABLE_RANGE)).floor();
    // offset is in [0, 93]
    Ok(char::from(PRINTABLE_START + offset as u8))
}

/// Map a uniform stream element-wise, keeping index order.
///
/// # Errors
/// Returns the first [`NumericDomainError`], with `index` set to the
/// position of the offending value.
///
/// # Examples
/// ```
/// use ecpass_core::math::charmap::map_stream;
///
/// assert_eq!(map_stream(&[1.0, 0.0, 0.5]).unwrap(), "]!?");
/// ```
pub fn map_stream(values: &[f64]) -> Result<String, NumericDomainError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &v)| map_to_char(v).map_err(|e| NumericDomainError { index, ..e }))
        .collect()
}
