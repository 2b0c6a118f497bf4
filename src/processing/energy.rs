// src/processing/energy.rs
//! Per-mode energy scoring
//!
//! The energy of an IMF is its mean squared value. Removing mode `k` from a
//! partial reconstruction changes it by exactly that mode, so the mean
//! squared error between consecutive reconstructions reduces to this score.

use crate::processing::emd::ModeSet;
use crate::utils::stats;

/// Mean squared value of one mode.
pub fn energy_score(mode: &[f64]) -> f64 {
    stats::mean_square(mode)
}

/// Scores for IMFs `0..=M-2` of a set with `M` IMFs.
///
/// The last IMF and the residue are never scored, so the result has
/// `M - 1` entries and is empty when fewer than two IMFs were extracted.
pub fn score_modes(modes: &ModeSet) -> Vec<f64> {
    let scored = modes.mode_count().saturating_sub(1);
    modes.modes()[..scored]
        .iter()
        .map(|mode| energy_score(mode))
        .collect()
}
