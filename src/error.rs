// src/error.rs
//! Unified error handling for the denoising pipeline
//!
//! Every stage reports failures through [`DenoiseError`]. Variants that
//! describe bad data carry the [`ProcessingStage`] that detected them so a
//! caller running many signals can tell a validation problem apart from a
//! decomposition that simply had nothing to extract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Pipeline stages for error tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessingStage {
    Validation,
    Normalization,
    Decomposition,
    CutoffSelection,
    Reconstruction,
    Spectrum,
}

impl fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessingStage::Validation => "VALIDATION",
            ProcessingStage::Normalization => "NORMALIZATION",
            ProcessingStage::Decomposition => "DECOMPOSITION",
            ProcessingStage::CutoffSelection => "CUTOFF",
            ProcessingStage::Reconstruction => "RECONSTRUCTION",
            ProcessingStage::Spectrum => "SPECTRUM",
        };
        write!(f, "{}", name)
    }
}

/// Unified error type for the denoising pipeline
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DenoiseError {
    /// Input rejected before any processing: too short, non-finite, malformed.
    #[error("[{stage}] invalid input: {reason}")]
    InvalidInput {
        stage: ProcessingStage,
        reason: String,
    },

    /// Zero-variance input; normalization would divide by zero.
    #[error("[NORMALIZATION] degenerate signal: standard deviation {std_dev:e} over {len} samples")]
    DegenerateSignal { std_dev: f64, len: usize },

    /// Not a single mode could be extracted.
    #[error("[DECOMPOSITION] cannot decompose signal: {extrema} interior extrema, need at least {required}")]
    DecompositionFailure { extrema: usize, required: usize },

    /// Signals that must share a length do not.
    #[error("[{stage}] length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch {
        stage: ProcessingStage,
        expected: usize,
        actual: usize,
    },

    #[error("[CUTOFF] cutoff index {cutoff} out of range for {mode_count} modes")]
    CutoffOutOfRange { cutoff: usize, mode_count: usize },

    #[error("[CONFIG] {0}")]
    Configuration(String),
}

impl DenoiseError {
    /// Shorthand for an [`DenoiseError::InvalidInput`] at `stage`.
    pub fn invalid_input(stage: ProcessingStage, reason: impl Into<String>) -> Self {
        DenoiseError::InvalidInput {
            stage,
            reason: reason.into(),
        }
    }

    /// Stage that raised the error, if it belongs to one.
    pub fn stage(&self) -> Option<ProcessingStage> {
        match self {
            DenoiseError::InvalidInput { stage, .. } => Some(*stage),
            DenoiseError::DegenerateSignal { .. } => Some(ProcessingStage::Normalization),
            DenoiseError::DecompositionFailure { .. } => Some(ProcessingStage::Decomposition),
            DenoiseError::LengthMismatch { stage, .. } => Some(*stage),
            DenoiseError::CutoffOutOfRange { .. } => Some(ProcessingStage::CutoffSelection),
            DenoiseError::Configuration(_) => None,
        }
    }

    /// Data-quality problems the caller may skip past, as opposed to
    /// invariant violations that point at a bug.
    pub fn is_data_quality(&self) -> bool {
        matches!(
            self,
            DenoiseError::InvalidInput { .. }
                | DenoiseError::DegenerateSignal { .. }
                | DenoiseError::DecompositionFailure { .. }
        )
    }
}

impl From<ConfigError> for DenoiseError {
    fn from(err: ConfigError) -> Self {
        DenoiseError::Configuration(err.to_string())
    }
}

/// Result type alias for pipeline operations
pub type DenoiseResult<T> = Result<T, DenoiseError>;
