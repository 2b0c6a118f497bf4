// src/processing/cutoff.rs
//! Cutoff mode selection
//!
//! The cutoff is the scored mode with the lowest energy. Modes before it are
//! treated as noise; it and every later mode (through the residue) are kept.

/// Index of the first minimum score; `0` when nothing was scored.
///
/// Scores are compared with [`f64::total_cmp`], so the scan is deterministic
/// and the earliest of several equal minima wins.
pub fn select_cutoff(scores: &[f64]) -> usize {
    scores
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, &score)| match best {
            Some((_, lowest)) if score.total_cmp(&lowest).is_ge() => best,
            _ => Some((index, score)),
        })
        .map(|(index, _)| index)
        .unwrap_or(0)
}
