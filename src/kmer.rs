//! Validated k-mer length handed to the external indexer.

use std::num::NonZeroUsize;

use crate::error::KmerLengthError;

/// K-mer length used when the caller does not choose one.
pub const DEFAULT_K: usize = 9;

/// A positive k-mer length.
///
/// The length is passed through to the indexer unchanged; any upper bound is
/// the indexer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KmerLength(NonZeroUsize);

impl KmerLength {
    /// Validates `k`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mfeindex::kmer::KmerLength;
    ///
    /// assert_eq!(KmerLength::new(9)?.get(), 9);
    /// assert_eq!(KmerLength::new(40)?.get(), 40);
    /// assert!(KmerLength::new(0).is_err());
    /// # Ok::<(), mfeindex::error::KmerLengthError>(())
    /// ```
    pub const fn new(k: usize) -> Result<Self, KmerLengthError> {
        match NonZeroUsize::new(k) {
            Some(k) => Ok(Self(k)),
            None => Err(KmerLengthError { k }),
        }
    }

    /// Returns the length as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for KmerLength {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_K).unwrap_or(NonZeroUsize::MIN))
    }
}

impl std::fmt::Display for KmerLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for KmerLength {
    type Error = KmerLengthError;

    fn try_from(k: usize) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

impl From<NonZeroUsize> for KmerLength {
    fn from(k: NonZeroUsize) -> Self {
        Self(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_nine() {
        assert_eq!(KmerLength::default().get(), DEFAULT_K);
    }

    #[test]
    fn accepts_any_positive_length() {
        assert!(KmerLength::new(1).is_ok());
        assert!(KmerLength::new(32).is_ok());
        assert_eq!(KmerLength::new(40).map(KmerLength::get), Ok(40));
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(KmerLength::new(0), Err(KmerLengthError { k: 0 }));
        assert!(KmerLength::try_from(0).is_err());
    }

    #[test]
    fn displays_as_number() {
        assert_eq!(KmerLength::new(12).map(|k| k.to_string()), Ok("12".to_string()));
    }
}
