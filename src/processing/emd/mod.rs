// src/processing/emd/mod.rs
//! Empirical mode decomposition
//!
//! Splits a signal into intrinsic mode functions (IMFs), fastest first, plus a
//! non-oscillatory residue. Each IMF is refined by sifting: the mean of the
//! upper and lower envelopes is repeatedly subtracted from the candidate
//! until successive candidates stop changing.
//!
//! The residue is kept apart from the IMFs in [`ModeSet`]; the sum of every
//! IMF and the residue reproduces the decomposed input.

pub mod envelope;
pub mod extrema;
pub mod spline;

pub use envelope::{CubicSplineEnvelope, EnvelopeStrategy, Envelopes, LinearEnvelope};
pub use extrema::{count_extrema, find_extrema, Extrema};
pub use spline::NaturalCubicSpline;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::constants::emd::MIN_EXTREMA_FOR_MODE;
use crate::config::EmdConfig;
use crate::error::{DenoiseError, DenoiseResult, ProcessingStage};
use crate::processing::types::Signal;
use crate::utils::stats;
use crate::utils::validation::{validate_same_length, validate_signal};

/// Why sifting of one IMF stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiftStop {
    /// Successive candidates differed by less than the sifting threshold.
    Converged,
    /// `max_sift_iterations` was reached first.
    IterationLimit,
    /// The candidate no longer had extrema to build envelopes from.
    ExtremaExhausted,
}

/// Sifting diagnostics for one extracted IMF
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImfInfo {
    pub iterations: usize,
    /// Normalized squared difference of the last sifting step.
    pub final_sd: f64,
    pub stop: SiftStop,
}

/// Ordered IMFs (fastest first) plus the trailing residue
#[derive(Debug, Clone, PartialEq)]
pub struct ModeSet {
    modes: Vec<Signal>,
    residue: Signal,
    diagnostics: Vec<ImfInfo>,
}

impl ModeSet {
    /// Build a mode set; every mode must match the residue's length.
    pub fn new(modes: Vec<Signal>, residue: Signal) -> DenoiseResult<Self> {
        for mode in &modes {
            validate_same_length(residue.len(), mode.len(), ProcessingStage::Decomposition)?;
        }
        Ok(Self {
            modes,
            residue,
            diagnostics: Vec::new(),
        })
    }

    fn with_diagnostics(mut self, diagnostics: Vec<ImfInfo>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Extracted IMFs, excluding the residue.
    pub fn modes(&self) -> &[Signal] {
        &self.modes
    }

    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    pub fn residue(&self) -> &Signal {
        &self.residue
    }

    /// Length shared by every mode and the residue.
    pub fn signal_len(&self) -> usize {
        self.residue.len()
    }

    /// Sifting diagnostics, one per IMF; empty for hand-built sets.
    pub fn diagnostics(&self) -> &[ImfInfo] {
        &self.diagnostics
    }

    /// Element-wise sum of every IMF and the residue.
    pub fn total(&self) -> Signal {
        let mut total = self.residue.to_vec();
        for mode in &self.modes {
            for (t, m) in total.iter_mut().zip(mode.iter()) {
                *t += m;
            }
        }
        Signal::from_finite(total)
    }
}

/// Sifting-based mode decomposer, generic over the envelope scheme
#[derive(Debug, Clone)]
pub struct ModeDecomposer<E = CubicSplineEnvelope> {
    config: EmdConfig,
    envelope: E,
}

impl ModeDecomposer<CubicSplineEnvelope> {
    /// Decomposer with cubic-spline envelopes.
    pub fn new(config: EmdConfig) -> Self {
        let envelope = CubicSplineEnvelope {
            mirror_extrema: config.mirror_extrema,
        };
        Self { config, envelope }
    }
}

impl Default for ModeDecomposer<CubicSplineEnvelope> {
    fn default() -> Self {
        Self::new(EmdConfig::default())
    }
}

impl<E: EnvelopeStrategy> ModeDecomposer<E> {
    /// Decomposer with a custom envelope strategy.
    pub fn with_envelope(config: EmdConfig, envelope: E) -> Self {
        Self { config, envelope }
    }

    pub fn config(&self) -> &EmdConfig {
        &self.config
    }

    /// Decompose `signal` into IMFs and a residue.
    ///
    /// Fails with [`DenoiseError::DecompositionFailure`] when the signal has
    /// too few extrema to yield even one IMF (monotonic or flat input).
    pub fn decompose(&self, signal: &Signal) -> DenoiseResult<ModeSet> {
        validate_signal(signal, ProcessingStage::Decomposition)?;

        let n = signal.len();
        let input_range = stats::range(signal);
        let input_energy = stats::mean_square(signal);
        let max_imfs = self.config.effective_max_imfs(n);

        let mut residual = signal.to_vec();
        let mut modes = Vec::new();
        let mut diagnostics = Vec::new();

        while modes.len() < max_imfs {
            let extrema = count_extrema(&residual);
            if extrema < MIN_EXTREMA_FOR_MODE {
                trace!(extrema, "residual is monotonic");
                break;
            }
            if stats::range(&residual) < self.config.range_threshold * input_range {
                trace!("residual range below threshold");
                break;
            }
            if stats::mean_square(&residual) < self.config.energy_threshold * input_energy {
                trace!("residual energy below threshold");
                break;
            }

            let (imf, info) = self.sift(&residual);
            for (r, m) in residual.iter_mut().zip(imf.iter()) {
                *r -= m;
            }

            debug!(
                index = modes.len(),
                iterations = info.iterations,
                sd = info.final_sd,
                stop = ?info.stop,
                "extracted IMF"
            );
            modes.push(Signal::from_finite(imf));
            diagnostics.push(info);
        }

        if modes.is_empty() {
            return Err(DenoiseError::DecompositionFailure {
                extrema: count_extrema(signal),
                required: MIN_EXTREMA_FOR_MODE,
            });
        }

        Ok(ModeSet::new(modes, Signal::from_finite(residual))?.with_diagnostics(diagnostics))
    }

    /// Refine one IMF out of `residual`.
    fn sift(&self, residual: &[f64]) -> (Vec<f64>, ImfInfo) {
        let mut candidate = residual.to_vec();
        let mut info = ImfInfo {
            iterations: 0,
            final_sd: f64::INFINITY,
            stop: SiftStop::IterationLimit,
        };

        for iteration in 1..=self.config.max_sift_iterations {
            let Some(envelopes) = self.envelope.compute_envelopes(&candidate) else {
                info.stop = SiftStop::ExtremaExhausted;
                break;
            };

            let mean = envelopes.mean();
            let previous_energy: f64 = candidate.iter().map(|h| h * h).sum();
            let change: f64 = mean.iter().map(|m| m * m).sum();
            for (h, m) in candidate.iter_mut().zip(mean.iter()) {
                *h -= m;
            }

            let sd = if previous_energy > f64::MIN_POSITIVE {
                change / previous_energy
            } else {
                0.0
            };
            info.iterations = iteration;
            info.final_sd = sd;
            trace!(iteration, sd, "sifting step");

            if sd < self.config.sift_threshold {
                info.stop = SiftStop::Converged;
                break;
            }
        }

        if info.stop == SiftStop::IterationLimit {
            warn!(
                iterations = info.iterations,
                sd = info.final_sd,
                "sifting hit iteration limit"
            );
        }

        (candidate, info)
    }
}
