//! AssociativeNetwork - Hopfield network with Hebbian training and
//! stochastic asynchronous relaxation.
//!
//! The network owns a vector of binary node values (its current state) and
//! an N x N matrix of signed integer weights, symmetric by construction
//! with a zero diagonal.
//!
//! # Algorithm
//!
//! 1. `train` imprints a pattern by accumulating its bipolar outer product
//!    into the weights: `w[i][j] += (2*v[i] - 1) * (2*v[j] - 1)` for i != j.
//!    The accumulation is additive and unnormalized, so weight magnitudes
//!    grow with the number of stored patterns (the classical Hebbian rule
//!    at this storage capacity).
//! 2. `initialize` loads a cue into the node vector.
//! 3. `update` relaxes a single node chosen uniformly at random: it sets
//!    the node to 1 when its weighted input sum is >= 0, else 0. Ties go
//!    to 1.
//! 4. `energy` reads out `-0.5 * sum(w[i][j] * v[i] * v[j])`, a diagnostic
//!    whose local minima correspond to stable attractor configurations.
//!
//! # Examples
//!
//! ```
//! use hopfield::AssociativeNetwork;
//!
//! let mut net = AssociativeNetwork::with_seed(4, 0);
//! net.train(&[1, 0, 1, 0]).unwrap();
//!
//! // Training on a single pattern stores it exactly
//! assert_eq!(net.nodes(), &[1, 0, 1, 0]);
//! assert_eq!(net.weight(0, 2), 1);
//! assert_eq!(net.weight(0, 1), -1);
//!
//! net.initialize(&[1, 0, 1, 1]).unwrap();
//! net.update(); // one stochastic relaxation step
//! ```

use crate::error::{HopfieldError, Result};
use crate::state::{validate_binary, BinaryState};
use crate::utils::bipolar;
use itertools::iproduct;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A Hopfield associative-memory network.
///
/// Created once with a fixed size N and reused across an unbounded
/// sequence of training and recall cycles: `train` mutates the weights,
/// `initialize` loads a cue into the nodes, repeated `update` calls relax
/// the state toward an attractor.
///
/// The pseudo-random source driving `update` is owned per instance and
/// explicitly seedable, so recall behavior is reproducible under
/// [`AssociativeNetwork::with_seed`].
pub struct AssociativeNetwork {
    /// Current node values, all in {0, 1}
    nodes: Vec<u8>,

    /// Row-major N x N weight matrix, symmetric, zero diagonal
    weights: Vec<i32>,

    /// Private random source used only by `update`
    rng: StdRng,

    size: usize,
}

impl AssociativeNetwork {
    /// Create a network of `size` nodes with zeroed nodes and weights,
    /// seeded from system entropy.
    ///
    /// # Examples
    ///
    /// ```
    /// use hopfield::AssociativeNetwork;
    ///
    /// let net = AssociativeNetwork::new(15);
    /// assert_eq!(net.size(), 15);
    /// assert_eq!(net.nodes(), vec![0; 15].as_slice());
    /// ```
    pub fn new(size: usize) -> Self {
        Self::from_rng(size, StdRng::from_entropy())
    }

    /// Create a network with a deterministic random source.
    ///
    /// Two networks built with the same seed, trained on the same patterns
    /// and initialized with the same cue, perform identical relaxation
    /// trajectories.
    pub fn with_seed(size: usize, seed: u64) -> Self {
        Self::from_rng(size, StdRng::seed_from_u64(seed))
    }

    fn from_rng(size: usize, rng: StdRng) -> Self {
        Self {
            nodes: vec![0; size],
            weights: vec![0; size * size],
            rng,
            size,
        }
    }

    /// Number of nodes N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current node values as a read-only slice.
    #[inline]
    pub fn nodes(&self) -> &[u8] {
        &self.nodes
    }

    /// Snapshot the current node values as a [`BinaryState`], suitable for
    /// attractor-table lookups.
    pub fn state(&self) -> BinaryState {
        // Nodes are maintained in {0, 1}, so wrapping cannot fail
        BinaryState::new(&self.nodes).unwrap_or_else(|_| unreachable!())
    }

    /// Weight between nodes `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> i32 {
        assert!(i < self.size && j < self.size, "node index out of bounds");
        self.weights[i * self.size + j]
    }

    /// Load `state` into the node vector.
    ///
    /// Required before the first `update` of a recall cycle. Validation
    /// happens before any mutation, so a failed call leaves `nodes`
    /// unmodified.
    ///
    /// # Errors
    ///
    /// - [`HopfieldError::SizeMismatch`] if `state.len() != size`
    /// - [`HopfieldError::InvalidValue`] if any element is outside {0, 1}
    pub fn initialize(&mut self, state: &[u8]) -> Result<()> {
        if state.len() != self.size {
            return Err(HopfieldError::SizeMismatch {
                expected: self.size,
                actual: state.len(),
            });
        }
        validate_binary(state)?;
        self.nodes.copy_from_slice(state);
        Ok(())
    }

    /// Imprint `pattern` into the weight matrix.
    ///
    /// Loads the pattern as the current node vector, then accumulates the
    /// Hebbian update `w[i][j] += (2*v[i] - 1) * (2*v[j] - 1)` over every
    /// ordered pair i != j. The diagonal stays 0 (no self-connection) and
    /// symmetry is preserved because the product is commutative. Training
    /// is the sole mutator of the weights; successive calls accumulate
    /// into the same matrix with no normalization.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AssociativeNetwork::initialize`]; a failed call
    /// leaves both `nodes` and `weights` untouched.
    pub fn train(&mut self, pattern: &[u8]) -> Result<()> {
        self.initialize(pattern)?;
        for (i, j) in iproduct!(0..self.size, 0..self.size) {
            if i != j {
                self.weights[i * self.size + j] +=
                    bipolar(self.nodes[i]) * bipolar(self.nodes[j]);
            }
        }
        Ok(())
    }

    /// Perform one asynchronous relaxation step.
    ///
    /// Picks an index `k` uniformly at random, computes the weighted input
    /// sum over all nodes (the j = k term vanishes because the diagonal is
    /// zero), and thresholds: `nodes[k] = 1` if the sum is >= 0, else 0,
    /// so a tie activates the node.
    ///
    /// Mutates exactly one element of `nodes`. Callers are expected to
    /// have initialized the network at least once; before that the node
    /// vector is all zeros and the step is still well defined.
    pub fn update(&mut self) {
        let k = self.rng.gen_range(0..self.size);
        let row = &self.weights[k * self.size..(k + 1) * self.size];
        let input: i64 = row
            .iter()
            .zip(self.nodes.iter())
            .map(|(&w, &v)| w as i64 * v as i64)
            .sum();
        self.nodes[k] = if input >= 0 { 1 } else { 0 };
    }

    /// Energy of the current configuration:
    /// `E = -0.5 * sum_i sum_j v[i] * v[j] * w[i][j]`.
    ///
    /// Pure read. Lower energy means a more stable configuration; the
    /// convergence loop does not consult it, but stable attractors sit at
    /// local minima with respect to single-bit flips.
    pub fn energy(&self) -> f64 {
        let mut sum: i64 = 0;
        for (i, j) in iproduct!(0..self.size, 0..self.size) {
            sum += self.nodes[i] as i64
                * self.nodes[j] as i64
                * self.weights[i * self.size + j] as i64;
        }
        sum as f64 * -0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_network_is_zeroed() {
        let net = AssociativeNetwork::new(8);
        assert_eq!(net.nodes(), &[0; 8]);
        for i in 0..8 {
            for j in 0..8 {
                assert_eq!(net.weight(i, j), 0);
            }
        }
    }

    #[test]
    fn test_initialize_copies_state() {
        let mut net = AssociativeNetwork::with_seed(4, 0);
        net.initialize(&[1, 1, 0, 0]).unwrap();
        assert_eq!(net.nodes(), &[1, 1, 0, 0]);
    }

    #[test]
    fn test_initialize_rejects_wrong_length() {
        let mut net = AssociativeNetwork::with_seed(4, 0);
        let err = net.initialize(&[1, 0]).unwrap_err();
        assert!(matches!(
            err,
            HopfieldError::SizeMismatch {
                expected: 4,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_initialize_rejects_non_binary() {
        let mut net = AssociativeNetwork::with_seed(3, 0);
        let err = net.initialize(&[0, 3, 1]).unwrap_err();
        assert!(matches!(
            err,
            HopfieldError::InvalidValue { index: 1, value: 3 }
        ));
    }

    #[test]
    fn test_train_zero_diagonal() {
        let mut net = AssociativeNetwork::with_seed(5, 0);
        net.train(&[1, 0, 1, 1, 0]).unwrap();
        net.train(&[0, 0, 1, 0, 1]).unwrap();
        for i in 0..5 {
            assert_eq!(net.weight(i, i), 0);
        }
    }

    #[test]
    fn test_update_mutates_at_most_one_node() {
        let mut net = AssociativeNetwork::with_seed(6, 7);
        net.train(&[1, 0, 1, 0, 1, 0]).unwrap();
        net.initialize(&[1, 1, 1, 0, 1, 0]).unwrap();

        let before = net.nodes().to_vec();
        net.update();
        let diff = crate::utils::hamming(&before, net.nodes());
        assert!(diff <= 1, "update changed {diff} nodes");
    }

    #[test]
    fn test_update_before_initialize_is_well_defined() {
        // All-zero nodes, all-zero weights: input sum is 0, ties go to 1
        let mut net = AssociativeNetwork::with_seed(4, 1);
        net.update();
        assert_eq!(net.nodes().iter().map(|&v| v as usize).sum::<usize>(), 1);
    }

    #[test]
    fn test_state_snapshot_is_detached() {
        let mut net = AssociativeNetwork::with_seed(3, 0);
        net.initialize(&[1, 0, 1]).unwrap();
        let snap = net.state();
        net.initialize(&[0, 0, 0]).unwrap();
        assert_eq!(snap.values(), &[1, 0, 1]);
    }

    #[test]
    fn test_seeded_updates_are_reproducible() {
        let mut a = AssociativeNetwork::with_seed(10, 42);
        let mut b = AssociativeNetwork::with_seed(10, 42);
        let pattern = [1, 0, 1, 0, 1, 0, 1, 0, 1, 0];
        a.train(&pattern).unwrap();
        b.train(&pattern).unwrap();
        a.initialize(&[1, 1, 1, 0, 1, 0, 1, 0, 0, 0]).unwrap();
        b.initialize(&[1, 1, 1, 0, 1, 0, 1, 0, 0, 0]).unwrap();

        for _ in 0..50 {
            a.update();
            b.update();
            assert_eq!(a.nodes(), b.nodes());
        }
    }
}
