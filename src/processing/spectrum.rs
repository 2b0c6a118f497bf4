// src/processing/spectrum.rs
//! Time-domain to frequency-domain conversion
//!
//! Produces the single-sided amplitude spectrum of a uniformly sampled
//! signal, restricted to a configured frequency band.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::constants::spectrum::{DB_FLOOR, UNIFORM_SPACING_TOLERANCE};
use crate::config::SpectrumConfig;
use crate::error::{DenoiseError, DenoiseResult, ProcessingStage};
use crate::utils::validation::{validate_finite, validate_same_length, validate_signal};

/// Amplitude spectrum over a frequency band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// Bin centre frequencies in Hz, ascending.
    pub frequencies: Vec<f64>,
    /// Linear amplitude, or dB when configured.
    pub amplitudes: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// FFT-based frequency converter
#[derive(Debug, Clone)]
pub struct FrequencyConverter {
    config: SpectrumConfig,
}

impl FrequencyConverter {
    pub fn new(config: SpectrumConfig) -> DenoiseResult<Self> {
        config.validate().map_err(|errors| {
            DenoiseError::Configuration(
                errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "),
            )
        })?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SpectrumConfig {
        &self.config
    }

    /// Convert samples taken at `times` (seconds) into a band-limited spectrum.
    pub fn convert(&self, times: &[f64], samples: &[f64]) -> DenoiseResult<Spectrum> {
        const STAGE: ProcessingStage = ProcessingStage::Spectrum;

        validate_signal(samples, STAGE)?;
        validate_finite(times, STAGE)?;
        validate_same_length(samples.len(), times.len(), STAGE)?;

        let sample_rate = sample_rate_hz(times)?;
        let n = samples.len();

        let mut buffer: Vec<Complex<f64>> =
            samples.iter().map(|&x| Complex::new(x, 0.0)).collect();
        FftPlanner::<f64>::new().plan_fft_forward(n).process(&mut buffer);

        let bin_width = sample_rate / n as f64;
        let nyquist_bin = if n % 2 == 0 { Some(n / 2) } else { None };

        let mut spectrum = Spectrum {
            frequencies: Vec::new(),
            amplitudes: Vec::new(),
        };
        for (k, value) in buffer.iter().enumerate().take(n / 2 + 1) {
            let frequency = k as f64 * bin_width;
            if frequency < self.config.min_freq_hz || frequency > self.config.max_freq_hz {
                continue;
            }

            let scale = if k == 0 || Some(k) == nyquist_bin { 1.0 } else { 2.0 };
            let amplitude = scale * value.norm() / n as f64;
            let amplitude = if self.config.in_db {
                20.0 * amplitude.max(DB_FLOOR).log10()
            } else {
                amplitude
            };

            spectrum.frequencies.push(frequency);
            spectrum.amplitudes.push(amplitude);
        }

        if spectrum.is_empty() {
            return Err(DenoiseError::invalid_input(
                STAGE,
                format!(
                    "no frequency bins in [{}, {}] Hz (bin width {:.4} Hz, sample rate {:.4} Hz)",
                    self.config.min_freq_hz, self.config.max_freq_hz, bin_width, sample_rate
                ),
            ));
        }

        debug!(
            bins = spectrum.len(),
            sample_rate,
            bin_width,
            "converted to frequency domain"
        );
        Ok(spectrum)
    }
}

/// Sample rate implied by strictly increasing, uniformly spaced `times`.
pub fn sample_rate_hz(times: &[f64]) -> DenoiseResult<f64> {
    const STAGE: ProcessingStage = ProcessingStage::Spectrum;

    if times.len() < 2 {
        return Err(DenoiseError::invalid_input(STAGE, "need at least two sample times"));
    }

    let span = times[times.len() - 1] - times[0];
    let interval = span / (times.len() - 1) as f64;
    if !(interval > 0.0) {
        return Err(DenoiseError::invalid_input(STAGE, "sample times are not increasing"));
    }

    for (i, w) in times.windows(2).enumerate() {
        let step = w[1] - w[0];
        if !(step > 0.0) {
            return Err(DenoiseError::invalid_input(
                STAGE,
                format!("sample times not strictly increasing at index {}", i + 1),
            ));
        }
        if ((step - interval) / interval).abs() > UNIFORM_SPACING_TOLERANCE {
            return Err(DenoiseError::invalid_input(
                STAGE,
                format!(
                    "non-uniform sampling at index {}: step {} vs mean {}",
                    i + 1,
                    step,
                    interval
                ),
            ));
        }
    }

    Ok(1.0 / interval)
}
