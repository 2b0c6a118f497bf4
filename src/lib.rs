//! emd-denoise: spectrum denoising by empirical mode decomposition
//!
//! A signal (typically a frequency-domain amplitude spectrum) is normalized,
//! decomposed into intrinsic mode functions, and rebuilt from the modes that
//! follow the lowest-energy mode. The leading, fastest-varying modes before
//! that cutoff are treated as noise.
//!
//! - Empirical mode decomposition with replaceable envelope strategies
//! - Energy-based cutoff selection and partial reconstruction
//! - FFT amplitude spectra and multi-channel averaging for raw recordings
//! - Layered configuration (defaults, TOML, environment)
//!
//! # Quick Start
//!
//! ```rust
//! use emd_denoise::{DenoiseOutcome, EmdDenoiser};
//!
//! let spectrum: Vec<f64> = (0..128)
//!     .map(|i| (i as f64 * 0.2).sin() + 0.3 * (i as f64 * 2.5).sin())
//!     .collect();
//!
//! let denoiser = EmdDenoiser::default();
//! let report = denoiser.denoise_samples(&spectrum)?;
//! assert_eq!(report.output.len(), spectrum.len());
//! assert_eq!(report.outcome, DenoiseOutcome::Denoised);
//! # Ok::<(), emd_denoise::DenoiseError>(())
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod processing;
pub mod simulation;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigLoader, DenoiseConfig, EmdConfig, SpectrumConfig};
pub use error::{DenoiseError, DenoiseResult, ProcessingStage};
pub use processing::{
    DenoiseOutcome, DenoiseReport, EmdDenoiser, FrequencyConverter, ModeDecomposer, ModeSet,
    RecordingAnalyzer, RecordingReport, Signal,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Denoise `samples` with the default configuration, returning only the output.
pub fn denoise(samples: &[f64]) -> DenoiseResult<Vec<f64>> {
    EmdDenoiser::default()
        .denoise_samples(samples)
        .map(|report| report.output.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "emd-denoise");
    }

    #[test]
    fn test_denoise_shortcut() {
        let samples: Vec<f64> = (0..64).map(|i| (i as f64 * 0.4).sin()).collect();
        assert_eq!(denoise(&samples).unwrap().len(), 64);
        assert!(denoise(&[1.0; 8]).is_err());
    }
}
