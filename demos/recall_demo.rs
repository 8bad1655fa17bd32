//! End-to-end recall demo: train on a few 5x3 glyph patterns, corrupt
//! cues, and report how the network recalls them.
//!
//! Run with `cargo run --example recall_demo`.

use anyhow::Result;
use hopfield::{AssociativeNetwork, BinaryState, RecallDriver, DEFAULT_MAX_ITERATIONS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::time::Instant;

const GLYPH_SIZE: usize = 5 * 3;

/// 5x3 glyphs for a few digits, row-major.
fn glyphs() -> Vec<(&'static str, [u8; GLYPH_SIZE])> {
    vec![
        ("0", [1, 1, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1, 1, 1, 1]),
        ("1", [0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0, 1, 1, 1]),
        ("4", [1, 0, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 0, 0, 1]),
        ("7", [1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0]),
    ]
}

/// Flip `flips` distinct bits of `pattern`.
fn corrupt(pattern: &[u8], flips: usize, rng: &mut StdRng) -> Vec<u8> {
    let mut noisy = pattern.to_vec();
    let mut flipped = Vec::new();
    while flipped.len() < flips {
        let k = rng.gen_range(0..noisy.len());
        if !flipped.contains(&k) {
            noisy[k] = 1 - noisy[k];
            flipped.push(k);
        }
    }
    noisy
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);

    let mut attractors: HashMap<BinaryState, String> = HashMap::new();
    let mut cues: HashMap<BinaryState, String> = HashMap::new();
    for (label, glyph) in glyphs() {
        attractors.insert(BinaryState::new(&glyph)?, label.to_string());
        cues.insert(BinaryState::new(&corrupt(&glyph, 2, &mut rng))?, label.to_string());
    }

    let mut net = AssociativeNetwork::with_seed(GLYPH_SIZE, 7);

    let start = Instant::now();
    for state in attractors.keys() {
        net.train(state.values())?;
    }
    let training = start.elapsed();
    println!("training time: {training:?}");

    let driver = RecallDriver::new(attractors, DEFAULT_MAX_ITERATIONS);

    let recall_start = Instant::now();
    let tally = driver.evaluate(&mut net, &cues)?;
    let recall = recall_start.elapsed();
    println!("recall time: {recall:?}");
    println!("total time: {:?}", start.elapsed());

    println!(
        "success rate: {} out of {} ({:.0}%)",
        tally.correct,
        tally.total(),
        tally.success_rate() * 100.0
    );
    println!("tally: {}", serde_json::to_string_pretty(&tally)?);

    Ok(())
}
