//! RecallDriver - Drives relaxation until the network settles into a
//! trained attractor.
//!
//! The driver holds the attractor table (a mapping from trained
//! [`BinaryState`] to label, built once before any recall attempt) and a
//! maximum-iteration cap. A recall loads the cue into the network, then
//! alternates membership checks against the table with single-node
//! relaxation steps until the current state exactly matches a stored
//! attractor or the cap runs out.
//!
//! Termination is not guaranteed by the dynamics: the random asynchronous
//! update is not proven to reach an exact stored pattern from an arbitrary
//! cue, especially once accumulated weight noise from many stored patterns
//! is present. The cap turns that structural property into a
//! [`HopfieldError::NonConvergence`] outcome instead of an endless loop,
//! and batch evaluation tracks "wrong attractor" separately from "never
//! converged".
//!
//! # Examples
//!
//! ```
//! use hopfield::{AssociativeNetwork, BinaryState, RecallDriver};
//! use std::collections::HashMap;
//!
//! let mut attractors = HashMap::new();
//! attractors.insert(BinaryState::new(&[1, 0, 1, 0]).unwrap(), "a".to_string());
//!
//! let mut net = AssociativeNetwork::with_seed(4, 0);
//! net.train(&[1, 0, 1, 0]).unwrap();
//!
//! let driver = RecallDriver::new(attractors, 1_000);
//! let recall = driver
//!     .recall(&mut net, &BinaryState::new(&[1, 0, 1, 0]).unwrap())
//!     .unwrap();
//! assert_eq!(recall.label, "a");
//! assert_eq!(recall.iterations, 0); // cue was already an attractor
//! ```

use crate::error::{HopfieldError, Result};
use crate::network::AssociativeNetwork;
use crate::state::BinaryState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default relaxation-step cap, generous for digit-scale networks.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Outcome of a single successful recall.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recall {
    /// Label of the attractor the network settled into
    pub label: String,

    /// Number of `update` calls performed before the match (0 when the
    /// cue itself is a trained attractor)
    pub iterations: usize,

    /// The attractor state that was reached
    pub state: BinaryState,
}

/// Success/failure tally across a batch of cues.
///
/// "Wrong attractor" (converged, but to a state labeled differently than
/// expected) and "never converged" (iteration cap exhausted) are tracked
/// separately so capacity problems and dynamics problems stay
/// distinguishable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecallTally {
    /// Cues that converged to the attractor with the expected label
    pub correct: usize,

    /// Cues that converged to an attractor with a different label
    pub wrong_attractor: usize,

    /// Cues whose relaxation exhausted the iteration cap
    pub non_converged: usize,
}

impl RecallTally {
    /// Total number of cues evaluated.
    pub fn total(&self) -> usize {
        self.correct + self.wrong_attractor + self.non_converged
    }

    /// Fraction of cues recalled correctly, 0.0 for an empty batch.
    pub fn success_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.correct as f64 / self.total() as f64
        }
    }
}

/// Orchestrates recall: cue in, relaxation loop, attractor label out.
///
/// The attractor table is read-only during recall; only the shared
/// network's node vector is mutated.
pub struct RecallDriver {
    attractors: HashMap<BinaryState, String>,
    max_iterations: usize,
}

impl RecallDriver {
    /// Create a driver over a prebuilt attractor table.
    ///
    /// `max_iterations` bounds the relaxation loop of each recall;
    /// [`DEFAULT_MAX_ITERATIONS`] is a reasonable choice when the caller
    /// has no better estimate.
    pub fn new(attractors: HashMap<BinaryState, String>, max_iterations: usize) -> Self {
        Self {
            attractors,
            max_iterations,
        }
    }

    /// Number of stored attractors.
    pub fn num_attractors(&self) -> usize {
        self.attractors.len()
    }

    /// The configured relaxation-step cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Look up the label of an exact attractor state, if stored.
    pub fn label_of(&self, state: &BinaryState) -> Option<&str> {
        self.attractors.get(state).map(String::as_str)
    }

    /// Relax `network` from `cue` until its state matches a stored
    /// attractor.
    ///
    /// The membership check runs before the first `update`, so a cue that
    /// is itself a trained attractor returns after zero relaxation steps.
    /// Weights are untouched throughout.
    ///
    /// # Errors
    ///
    /// - [`HopfieldError::SizeMismatch`] / [`HopfieldError::InvalidValue`]
    ///   if the cue cannot be loaded into the network
    /// - [`HopfieldError::NonConvergence`] if no attractor is reached
    ///   within `max_iterations` update steps
    pub fn recall(&self, network: &mut AssociativeNetwork, cue: &BinaryState) -> Result<Recall> {
        network.initialize(cue.values())?;

        for iterations in 0..=self.max_iterations {
            let current = network.state();
            if let Some(label) = self.attractors.get(&current) {
                return Ok(Recall {
                    label: label.clone(),
                    iterations,
                    state: current,
                });
            }
            if iterations == self.max_iterations {
                break;
            }
            network.update();
        }

        Err(HopfieldError::NonConvergence {
            iterations: self.max_iterations,
        })
    }

    /// Run a batch of labeled cues and tally the outcomes.
    ///
    /// Non-convergence is folded into the tally rather than treated as a
    /// failure against the expected label; any other error (a malformed
    /// cue) aborts the batch.
    pub fn evaluate(
        &self,
        network: &mut AssociativeNetwork,
        cues: &HashMap<BinaryState, String>,
    ) -> Result<RecallTally> {
        let mut tally = RecallTally::default();
        for (cue, expected) in cues {
            match self.recall(network, cue) {
                Ok(recall) => {
                    if recall.label == *expected {
                        tally.correct += 1;
                    } else {
                        tally.wrong_attractor += 1;
                    }
                }
                Err(HopfieldError::NonConvergence { .. }) => {
                    tally.non_converged += 1;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(tally)
    }
}
