//! Hopfield - Associative Memory over Binary Patterns
//!
//! This crate simulates a Hopfield associative-memory network: it stores
//! binary patterns via Hebbian weight accumulation, then recalls a pattern
//! from a noisy or partial cue by iteratively relaxing network state
//! toward a stored attractor.
//!
//! # Key Characteristics
//!
//! - Binary {0, 1} node values with value-based state equality
//! - Unnormalized additive Hebbian training (outer-product rule)
//! - Stochastic asynchronous relaxation with a ties-to-1 threshold
//! - Energy readout whose local minima are the stable attractors
//! - Bounded recall loop that reports non-convergence instead of spinning
//!
//! # Architecture
//!
//! The crate is built around three core components:
//!
//! - **BinaryState**: immutable fixed-length binary vector, hashable, used
//!   as the attractor-table key
//! - **AssociativeNetwork**: node vector + symmetric integer weight
//!   matrix; training, cue loading, single-step relaxation, energy
//! - **RecallDriver**: the convergence loop - load a cue, relax step by
//!   step, stop when the state exactly matches a trained attractor
//!
//! plus a `dataset` collaborator that parses labeled records (with
//! optional grayscale thresholding and center-crop downsampling) into
//! attractor tables.
//!
//! # Examples
//!
//! ```
//! use hopfield::{AssociativeNetwork, BinaryState, RecallDriver};
//! use std::collections::HashMap;
//!
//! // Train a 4-node network on one pattern
//! let mut net = AssociativeNetwork::with_seed(4, 0);
//! net.train(&[1, 0, 1, 0]).unwrap();
//!
//! // Build the attractor table
//! let mut attractors = HashMap::new();
//! attractors.insert(BinaryState::new(&[1, 0, 1, 0]).unwrap(), "even".to_string());
//!
//! // Recall from the pattern itself: matches before any relaxation
//! let driver = RecallDriver::new(attractors, 1_000);
//! let cue = BinaryState::new(&[1, 0, 1, 0]).unwrap();
//! let recall = driver.recall(&mut net, &cue).unwrap();
//! assert_eq!(recall.label, "even");
//! assert_eq!(recall.iterations, 0);
//! ```
//!
//! # Nondeterminism
//!
//! The only nondeterminism is the uniform random index draw inside
//! [`AssociativeNetwork::update`]. The random source is owned per network
//! instance and seedable via [`AssociativeNetwork::with_seed`], so recall
//! trajectories are reproducible in tests.

// Module declarations
pub mod dataset;
pub mod error;
pub mod network;
pub mod recall;
pub mod state;
pub mod utils;

// Re-exports for convenient access
pub use error::{HopfieldError, Result};
pub use network::AssociativeNetwork;
pub use recall::{Recall, RecallDriver, RecallTally, DEFAULT_MAX_ITERATIONS};
pub use state::BinaryState;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Hopfield";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
