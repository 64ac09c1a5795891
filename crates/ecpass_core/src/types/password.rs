//! Strong password value type.

use std::fmt;

/// Printable-ASCII password produced by the pipeline.
///
/// Every character has a code in `[33, 126]`, so `len()` is both the byte
/// length and the character count.
///
/// # Examples
/// ```
/// use ecpass_core::generate;
///
/// let strong = generate("abc", 3).unwrap();
/// assert_eq!(strong.as_str(), "]!?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrongPassword(String);

impl StrongPassword {
    /// Wraps an already-mapped character string.
    pub(crate) fn new(inner: String) -> Self {
        debug_assert!(inner.bytes().all(|b| (33..=126).contains(&b)));
        Self(inner)
    }

    /// Returns the password as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the password has no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the wrapper and returns the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StrongPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StrongPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<StrongPassword> for String {
    fn from(password: StrongPassword) -> Self {
        password.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let pw = StrongPassword::new("a!~".to_string());
        assert_eq!(pw.as_str(), "a!~");
        assert_eq!(pw.len(), 3);
        assert!(!pw.is_empty());
        assert_eq!(pw.to_string(), "a!~");
        assert_eq!(pw.as_ref(), "a!~");
        assert_eq!(String::from(pw.clone()), "a!~");
        assert_eq!(pw.into_inner(), "a!~");
    }

    #[test]
    fn test_empty() {
        let pw = StrongPassword::new(String::new());
        assert!(pw.is_empty());
        assert_eq!(pw.len(), 0);
    }
}
