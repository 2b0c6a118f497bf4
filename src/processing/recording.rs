// src/processing/recording.rs
//! Recording analysis: channel averaging, frequency conversion, denoising

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::DenoiseConfig;
use crate::error::{DenoiseResult, ProcessingStage};
use crate::processing::channels::average_channels;
use crate::processing::pipeline::{DenoiseOutcome, EmdDenoiser};
use crate::processing::spectrum::FrequencyConverter;
use crate::processing::types::Signal;
use crate::utils::validation::validate_same_length;

/// Original and denoised spectra of one recording, ready for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingReport {
    pub frequencies: Vec<f64>,
    pub original_spectrum: Vec<f64>,
    pub denoised_spectrum: Vec<f64>,
    pub outcome: DenoiseOutcome,
    pub cutoff: usize,
    pub mode_count: usize,
}

/// Runs the full per-recording flow
#[derive(Debug, Clone)]
pub struct RecordingAnalyzer {
    converter: FrequencyConverter,
    denoiser: EmdDenoiser,
}

impl RecordingAnalyzer {
    pub fn new(config: DenoiseConfig) -> DenoiseResult<Self> {
        Ok(Self {
            converter: FrequencyConverter::new(config.spectrum.clone())?,
            denoiser: EmdDenoiser::new(config)?,
        })
    }

    /// Analyze a `channels x samples` recording taken at `times` (seconds).
    #[instrument(skip_all, fields(channels = channels.nrows(), samples = channels.ncols()))]
    pub fn analyze(&self, times: &[f64], channels: &Array2<f64>) -> DenoiseResult<RecordingReport> {
        validate_same_length(channels.ncols(), times.len(), ProcessingStage::Validation)?;

        let averaged = average_channels(channels)?;
        let spectrum = self.converter.convert(times, &averaged)?;
        let amplitudes = Signal::new(spectrum.amplitudes)?;
        let report = self.denoiser.denoise(&amplitudes)?;

        info!(
            bins = spectrum.frequencies.len(),
            cutoff = report.cutoff,
            mode_count = report.mode_count,
            outcome = ?report.outcome,
            "recording analyzed"
        );

        Ok(RecordingReport {
            frequencies: spectrum.frequencies,
            original_spectrum: amplitudes.into_inner(),
            denoised_spectrum: report.output.into_inner(),
            outcome: report.outcome,
            cutoff: report.cutoff,
            mode_count: report.mode_count,
        })
    }
}
