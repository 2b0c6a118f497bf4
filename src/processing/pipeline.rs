// src/processing/pipeline.rs
//! End-to-end EMD denoising pipeline
//!
//! input → normalize → decompose → score → select cutoff → reconstruct
//!
//! Every call is independent: the denoiser holds only its configuration, so
//! one instance can serve many signals, including from several threads.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::DenoiseConfig;
use crate::error::{DenoiseError, DenoiseResult, ProcessingStage};
use crate::processing::cutoff::select_cutoff;
use crate::processing::emd::{CubicSplineEnvelope, EnvelopeStrategy, ModeDecomposer};
use crate::processing::energy::score_modes;
use crate::processing::normalizer::{normalize, Normalization};
use crate::processing::reconstruct::reconstruct;
use crate::processing::types::Signal;
use crate::utils::validation::validate_signal;

/// How a denoise call produced its output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenoiseOutcome {
    /// Modes before the cutoff were discarded.
    Denoised,
    /// Nothing could be decomposed; the input is returned unchanged.
    Passthrough,
}

/// Result of denoising one signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenoiseReport {
    pub output: Signal,
    pub outcome: DenoiseOutcome,
    /// First retained IMF.
    pub cutoff: usize,
    /// Energy scores of IMFs `0..mode_count-1`.
    pub scores: Vec<f64>,
    /// IMFs extracted, excluding the residue.
    pub mode_count: usize,
    pub normalization: Normalization,
}

impl DenoiseReport {
    /// Number of leading IMFs discarded as noise.
    pub fn discarded_modes(&self) -> usize {
        self.cutoff
    }
}

/// EMD-based denoiser
#[derive(Debug, Clone)]
pub struct EmdDenoiser<E = CubicSplineEnvelope> {
    config: DenoiseConfig,
    decomposer: ModeDecomposer<E>,
}

impl EmdDenoiser<CubicSplineEnvelope> {
    /// Create a denoiser after validating `config`.
    pub fn new(config: DenoiseConfig) -> DenoiseResult<Self> {
        validate_config(&config)?;
        let decomposer = ModeDecomposer::new(config.emd.clone());
        Ok(Self { config, decomposer })
    }
}

impl Default for EmdDenoiser<CubicSplineEnvelope> {
    fn default() -> Self {
        let config = DenoiseConfig::default();
        let decomposer = ModeDecomposer::new(config.emd.clone());
        Self { config, decomposer }
    }
}

impl<E: EnvelopeStrategy> EmdDenoiser<E> {
    /// Create a denoiser with a custom envelope strategy.
    pub fn with_envelope(config: DenoiseConfig, envelope: E) -> DenoiseResult<Self> {
        validate_config(&config)?;
        let decomposer = ModeDecomposer::with_envelope(config.emd.clone(), envelope);
        Ok(Self { config, decomposer })
    }

    pub fn config(&self) -> &DenoiseConfig {
        &self.config
    }

    /// Denoise raw samples.
    pub fn denoise_samples(&self, samples: &[f64]) -> DenoiseResult<DenoiseReport> {
        validate_signal(samples, ProcessingStage::Validation)?;
        self.denoise(&Signal::from_finite(samples.to_vec()))
    }

    /// Denoise one signal.
    ///
    /// [`DenoiseError::DegenerateSignal`] and [`DenoiseError::InvalidInput`]
    /// propagate. A signal with nothing to decompose is returned unchanged
    /// with [`DenoiseOutcome::Passthrough`].
    #[instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn denoise(&self, input: &Signal) -> DenoiseResult<DenoiseReport> {
        validate_signal(input, ProcessingStage::Validation)?;

        let (normalized, normalization) = normalize(input)?;

        let modes = match self.decomposer.decompose(&normalized) {
            Ok(modes) => modes,
            Err(DenoiseError::DecompositionFailure { extrema, .. }) => {
                warn!(extrema, "signal cannot be decomposed, passing input through");
                return Ok(DenoiseReport {
                    output: input.clone(),
                    outcome: DenoiseOutcome::Passthrough,
                    cutoff: 0,
                    scores: Vec::new(),
                    mode_count: 0,
                    normalization,
                });
            }
            Err(e) => return Err(e),
        };

        let scores = score_modes(&modes);
        let cutoff = select_cutoff(&scores);
        debug!(
            mode_count = modes.mode_count(),
            cutoff,
            ?scores,
            "selected cutoff mode"
        );

        let reconstructed = reconstruct(&modes, cutoff)?;
        let output = if self.config.restore_scale {
            normalization.restore(&reconstructed)
        } else {
            reconstructed
        };

        Ok(DenoiseReport {
            output,
            outcome: DenoiseOutcome::Denoised,
            cutoff,
            scores,
            mode_count: modes.mode_count(),
            normalization,
        })
    }

    /// Denoise independent signals in parallel, preserving input order.
    pub fn denoise_batch(&self, inputs: &[Vec<f64>]) -> Vec<DenoiseResult<DenoiseReport>> {
        debug!(count = inputs.len(), "denoising batch");
        inputs
            .par_iter()
            .map(|samples| self.denoise_samples(samples))
            .collect()
    }
}

fn validate_config(config: &DenoiseConfig) -> DenoiseResult<()> {
    config.validate().map_err(|errors| {
        DenoiseError::Configuration(
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        )
    })
}
