// src/processing/normalizer.rs
//! Zero-mean, unit-variance rescaling

use serde::{Deserialize, Serialize};

use crate::config::constants::signal::MIN_RELATIVE_STD_DEV;
use crate::error::{DenoiseError, DenoiseResult};
use crate::processing::types::Signal;
use crate::utils::stats;

/// Mean and standard deviation removed by [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    pub mean: f64,
    pub std_dev: f64,
}

impl Normalization {
    /// Measure `samples`. Fails with [`DenoiseError::DegenerateSignal`] when
    /// every sample is equal, or the spread is lost in rounding relative to
    /// the sample magnitude.
    pub fn measure(samples: &[f64]) -> DenoiseResult<Self> {
        let mean = stats::mean(samples);
        let std_dev = stats::std_dev(samples);
        let magnitude = samples.iter().fold(0.0_f64, |m, x| m.max(x.abs()));

        if is_constant(samples) || !(std_dev > MIN_RELATIVE_STD_DEV * magnitude) {
            return Err(DenoiseError::DegenerateSignal {
                std_dev,
                len: samples.len(),
            });
        }

        Ok(Self { mean, std_dev })
    }

    /// `(x - mean) / std_dev` for every sample.
    pub fn apply(&self, samples: &[f64]) -> Signal {
        Signal::from_finite(samples.iter().map(|&x| (x - self.mean) / self.std_dev).collect())
    }

    /// Inverse of [`Normalization::apply`].
    pub fn restore(&self, samples: &[f64]) -> Signal {
        Signal::from_finite(samples.iter().map(|&x| x * self.std_dev + self.mean).collect())
    }
}

fn is_constant(samples: &[f64]) -> bool {
    samples
        .first()
        .map_or(true, |&first| samples.iter().all(|&x| x == first))
}

/// Rescale `signal` to zero mean and unit (population) standard deviation.
pub fn normalize(signal: &Signal) -> DenoiseResult<(Signal, Normalization)> {
    let normalization = Normalization::measure(signal)?;
    Ok((normalization.apply(signal), normalization))
}
