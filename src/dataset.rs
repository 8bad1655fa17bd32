//! Dataset loading - parses labeled binary patterns from delimited records.
//!
//! Each record is one comma-delimited line: the first field is the label,
//! the remaining fields are pixel/feature values. Two formats are
//! supported:
//!
//! - **Binary**: values are already 0/1 and used as-is.
//! - **Grayscale**: values are 0-255 pixels that get thresholded to black
//!   and white and symmetrically center-cropped from `old_size` x
//!   `old_size` down to `new_size` x `new_size` before wrapping.
//!
//! Duplicate states follow map-insert semantics: the last record with a
//! given state wins. Blank lines are skipped.
//!
//! # Examples
//!
//! ```
//! use hopfield::dataset::parse_states;
//!
//! let data = "7,1,0,1,0\n3,0,1,0,1\n";
//! let states = parse_states(data.as_bytes()).unwrap();
//! assert_eq!(states.len(), 2);
//! ```

use crate::error::{HopfieldError, Result};
use crate::state::BinaryState;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Cutoff between white and black when binarizing grayscale pixels.
pub const GRAYSCALE_THRESHOLD: u8 = 128;

/// Parse already-binary labeled records from a reader.
///
/// # Errors
///
/// Returns [`HopfieldError::InvalidRecord`] for fields that are not
/// integers in {0, 1}, or [`HopfieldError::Io`] on read failure.
pub fn parse_states<R: BufRead>(reader: R) -> Result<HashMap<BinaryState, String>> {
    let mut states = HashMap::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (label, values) = split_record(&line, idx + 1)?;
        let state = BinaryState::new(&values).map_err(|err| HopfieldError::InvalidRecord {
            line: idx + 1,
            reason: err.to_string(),
        })?;
        states.insert(state, label);
    }
    Ok(states)
}

/// Parse grayscale labeled records from a reader, thresholding each pixel
/// at [`GRAYSCALE_THRESHOLD`] and center-cropping the square image from
/// `old_size` to `new_size` per side.
///
/// # Errors
///
/// - [`HopfieldError::Other`] if the crop geometry is invalid
///   (`new_size > old_size` or an odd size difference)
/// - [`HopfieldError::InvalidRecord`] for malformed records
/// - [`HopfieldError::Io`] on read failure
pub fn parse_grayscale_states<R: BufRead>(
    reader: R,
    old_size: usize,
    new_size: usize,
) -> Result<HashMap<BinaryState, String>> {
    if new_size > old_size || (old_size - new_size) % 2 != 0 {
        return Err(HopfieldError::Other(format!(
            "cannot crop {old_size}x{old_size} image to {new_size}x{new_size}: \
             sides must shrink by the same even amount"
        )));
    }

    let mut states = HashMap::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (label, pixels) = split_record(&line, idx + 1)?;
        if pixels.len() != old_size * old_size {
            return Err(HopfieldError::InvalidRecord {
                line: idx + 1,
                reason: format!(
                    "expected {} pixels for a {old_size}x{old_size} image, got {}",
                    old_size * old_size,
                    pixels.len()
                ),
            });
        }
        let binary: Vec<u8> = pixels.iter().map(|&p| to_black_and_white(p)).collect();
        let cropped = shrink(&binary, old_size, new_size);
        // Thresholded values are guaranteed binary
        let state = BinaryState::new(&cropped).unwrap_or_else(|_| unreachable!());
        states.insert(state, label);
    }
    Ok(states)
}

/// Load already-binary labeled states from a file.
pub fn load_labeled_states<P: AsRef<Path>>(path: P) -> Result<HashMap<BinaryState, String>> {
    parse_states(BufReader::new(File::open(path)?))
}

/// Load grayscale labeled states from a file, binarizing and cropping.
pub fn load_grayscale_states<P: AsRef<Path>>(
    path: P,
    old_size: usize,
    new_size: usize,
) -> Result<HashMap<BinaryState, String>> {
    parse_grayscale_states(BufReader::new(File::open(path)?), old_size, new_size)
}

/// Split one record into its label and numeric fields.
fn split_record(line: &str, line_no: usize) -> Result<(String, Vec<u8>)> {
    let mut terms = line.split(',');
    // split always yields at least one term
    let label = terms.next().unwrap_or_default().trim().to_string();
    let mut values = Vec::new();
    for term in terms {
        let value = term
            .trim()
            .parse::<u8>()
            .map_err(|err| HopfieldError::InvalidRecord {
                line: line_no,
                reason: format!("field {:?}: {err}", term.trim()),
            })?;
        values.push(value);
    }
    Ok((label, values))
}

/// Convert a single grayscale pixel into black (1) or white (0).
#[inline]
fn to_black_and_white(pixel: u8) -> u8 {
    if pixel < GRAYSCALE_THRESHOLD {
        0
    } else {
        1
    }
}

/// Symmetrically crop a row-major `size` x `size` image down to
/// `new_size` x `new_size`, removing the same number of rows and columns
/// from each side.
fn shrink(values: &[u8], size: usize, new_size: usize) -> Vec<u8> {
    let chop = (size - new_size) / 2;
    let mut compact = Vec::with_capacity(new_size * new_size);
    for i in chop..size - chop {
        for j in chop..size - chop {
            compact.push(values[i * size + j]);
        }
    }
    compact
}
