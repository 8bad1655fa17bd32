//! Error types for the Hopfield crate.
//!
//! This module provides a unified error type for all operations in the
//! crate, using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for Hopfield operations.
///
/// This enum represents all possible error conditions that can occur
/// during training, recall, and dataset loading.
#[derive(Error, Debug)]
pub enum HopfieldError {
    /// A supplied state/pattern vector's length disagrees with the
    /// network's fixed size
    #[error("Size mismatch: expected {expected} nodes, got {actual}")]
    SizeMismatch {
        /// Size the network was constructed with
        expected: usize,
        /// Length of the supplied vector
        actual: usize,
    },

    /// An element outside {0, 1} was supplied to a binary operation
    #[error("Invalid node value {value} at index {index}: nodes must be 0 or 1")]
    InvalidValue {
        /// Position of the offending element
        index: usize,
        /// The offending value
        value: u8,
    },

    /// Recall's relaxation loop exhausted its iteration bound without
    /// matching any attractor
    #[error("No attractor reached after {iterations} relaxation steps")]
    NonConvergence {
        /// Number of update steps performed before giving up
        iterations: usize,
    },

    /// A dataset record could not be parsed
    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord {
        /// 1-based line number of the offending record
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

/// A specialized `Result` type for Hopfield operations.
///
/// This is a type alias for `Result<T, HopfieldError>` and is used
/// throughout the codebase for consistency.
pub type Result<T> = std::result::Result<T, HopfieldError>;
