//! BinaryState - Immutable binary pattern usable as an attractor key.
//!
//! A `BinaryState` is a fixed-length vector of 0/1 values with structural
//! equality and hashing, which is what lets trained patterns serve as keys
//! in an attractor table (`HashMap<BinaryState, String>`). The input is
//! copied on construction, so later mutation of the caller's buffer cannot
//! affect a stored state, and `values()` returns a shared borrow with no
//! mutation path.
//!
//! Validation is unconditional: every element must be 0 or 1 or the
//! constructor rejects the input with [`HopfieldError::InvalidValue`].
//!
//! # Examples
//!
//! ```
//! use hopfield::BinaryState;
//!
//! let a = BinaryState::new(&[1, 0, 1, 0]).unwrap();
//! let b = BinaryState::new(&[1, 0, 1, 0]).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 4);
//!
//! assert!(BinaryState::new(&[1, 0, 2]).is_err());
//! ```

use crate::error::{HopfieldError, Result};
use serde::{Deserialize, Serialize};

/// An immutable fixed-length binary vector with value-based equality
/// and hashing.
///
/// Two states with identical sequences are indistinguishable, which makes
/// `BinaryState` suitable both as a network state snapshot and as a
/// dictionary key identifying attractors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryState {
    values: Vec<u8>,
}

impl BinaryState {
    /// Create a new state from a slice of 0/1 values.
    ///
    /// The slice is copied; the state never aliases caller memory.
    ///
    /// # Errors
    ///
    /// Returns [`HopfieldError::InvalidValue`] if any element is outside
    /// {0, 1}. Out-of-range values are rejected, never clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use hopfield::BinaryState;
    ///
    /// let state = BinaryState::new(&[0, 1, 1, 0]).unwrap();
    /// assert_eq!(state.values(), &[0, 1, 1, 0]);
    /// ```
    pub fn new(values: &[u8]) -> Result<Self> {
        validate_binary(values)?;
        Ok(Self {
            values: values.to_vec(),
        })
    }

    /// Get the underlying binary sequence as a read-only slice.
    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of nodes in this state.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the state has zero nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Count positions at which this state differs from `other`.
    ///
    /// # Panics
    ///
    /// Panics if the states differ in length.
    pub fn hamming(&self, other: &BinaryState) -> usize {
        crate::utils::hamming(&self.values, &other.values)
    }
}

/// Check that every element of `values` is 0 or 1.
///
/// Internal validation shared with `AssociativeNetwork`, which exchanges
/// raw slices with callers rather than `BinaryState` wrappers.
pub(crate) fn validate_binary(values: &[u8]) -> Result<()> {
    for (index, &value) in values.iter().enumerate() {
        if value > 1 {
            return Err(HopfieldError::InvalidValue { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(state: &BinaryState) -> u64 {
        let mut hasher = DefaultHasher::new();
        state.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_construction_copies_input() {
        let mut buf = vec![1, 0, 1];
        let state = BinaryState::new(&buf).unwrap();
        buf[0] = 0;
        assert_eq!(state.values(), &[1, 0, 1]);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = BinaryState::new(&[0, 1, 2, 1]).unwrap_err();
        match err {
            HopfieldError::InvalidValue { index, value } => {
                assert_eq!(index, 2);
                assert_eq!(value, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_equality_is_structural() {
        let a = BinaryState::new(&[1, 0, 1, 0]).unwrap();
        let b = BinaryState::new(&[1, 0, 1, 0]).unwrap();
        let c = BinaryState::new(&[1, 0, 1, 1]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        // Different lengths are never equal
        let short = BinaryState::new(&[1, 0, 1]).unwrap();
        assert_ne!(a, short);
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let a = BinaryState::new(&[0, 1, 1, 0, 1]).unwrap();
        let b = BinaryState::new(&[0, 1, 1, 0, 1]).unwrap();
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_hamming() {
        let a = BinaryState::new(&[1, 0, 1, 0]).unwrap();
        let b = BinaryState::new(&[0, 0, 1, 1]).unwrap();
        assert_eq!(a.hamming(&b), 2);
        assert_eq!(a.hamming(&a), 0);
    }

    #[test]
    fn test_empty_state() {
        let state = BinaryState::new(&[]).unwrap();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let state = BinaryState::new(&[1, 0, 0, 1]).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: BinaryState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
