//! Utility functions for the Hopfield crate.
//!
//! Small helpers shared by training, recall, and the test suite.

/// Map a binary node value to its bipolar equivalent via `2v - 1`.
///
/// Used inside the Hebbian weight update so that a pair of equal-valued
/// nodes contributes +1 and a pair of differing nodes contributes -1.
///
/// # Examples
///
/// ```
/// use hopfield::utils::bipolar;
///
/// assert_eq!(bipolar(0), -1);
/// assert_eq!(bipolar(1), 1);
/// ```
#[inline(always)]
pub fn bipolar(v: u8) -> i32 {
    2 * v as i32 - 1
}

/// Count positions at which two binary vectors differ.
///
/// A diagnostic for how far a cue sits from an attractor; not used by the
/// relaxation loop itself.
///
/// # Panics
///
/// Panics if the slices differ in length.
///
/// # Examples
///
/// ```
/// use hopfield::utils::hamming;
///
/// assert_eq!(hamming(&[1, 0, 1, 0], &[1, 0, 1, 0]), 0);
/// assert_eq!(hamming(&[1, 0, 1, 0], &[0, 0, 1, 1]), 2);
/// ```
#[inline]
pub fn hamming(a: &[u8], b: &[u8]) -> usize {
    assert_eq!(a.len(), b.len(), "hamming distance requires equal lengths");
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}
