//! Validation utilities for emd-denoise
//!
//! Two families live here:
//! - configuration field checks that report a [`ValidationError`]
//! - signal boundary checks that report a [`DenoiseError`] tagged with the
//!   stage doing the checking
//!
//! Limits come from [`crate::config::constants`].

use std::fmt;

use crate::config::constants::signal;
use crate::error::{DenoiseError, DenoiseResult, ProcessingStage};

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation error types
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value out of valid range
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },
    /// Cross-field validation failure
    ConstraintViolation {
        fields: Vec<String>,
        message: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::OutOfRange { field, value, min, max } => {
                write!(f, "Field '{}' value '{}' is out of range [{}, {}]", field, value, min, max)
            }
            ValidationError::ConstraintViolation { fields, message } => {
                write!(f, "Constraint violation for fields [{}]: {}", fields.join(", "), message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate that a value lies in `[min, max]`
pub fn validate_range<T>(value: T, min: T, max: T, field: &str) -> ValidationResult<()>
where
    T: PartialOrd + fmt::Display + Copy,
{
    if !(value >= min && value <= max) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

/// Reject NaN and infinite samples.
pub fn validate_finite(samples: &[f64], stage: ProcessingStage) -> DenoiseResult<()> {
    if let Some((index, value)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(DenoiseError::invalid_input(
            stage,
            format!("non-finite sample {} at index {}", value, index),
        ));
    }
    Ok(())
}

/// Reject signals shorter than `min_len`.
pub fn validate_min_length(
    samples: &[f64],
    min_len: usize,
    stage: ProcessingStage,
) -> DenoiseResult<()> {
    if samples.len() < min_len {
        return Err(DenoiseError::invalid_input(
            stage,
            format!("signal has {} samples, need at least {}", samples.len(), min_len),
        ));
    }
    Ok(())
}

/// Entry check applied before decomposition: length and finiteness.
pub fn validate_signal(samples: &[f64], stage: ProcessingStage) -> DenoiseResult<()> {
    validate_min_length(samples, signal::MIN_SIGNAL_LENGTH, stage)?;
    validate_finite(samples, stage)
}

/// Both sequences must share a length.
pub fn validate_same_length(
    expected: usize,
    actual: usize,
    stage: ProcessingStage,
) -> DenoiseResult<()> {
    if expected != actual {
        return Err(DenoiseError::LengthMismatch {
            stage,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range(5, 1, 10, "n").is_ok());
        assert!(validate_range(0.5, 0.0, 1.0, "x").is_ok());

        let err = validate_range(11, 1, 10, "n").unwrap_err();
        assert!(err.to_string().contains("'n'"));
        assert!(validate_range(f64::NAN, 0.0, 1.0, "x").is_err());
    }

    #[test]
    fn test_validate_signal_length() {
        let err = validate_signal(&[1.0, 2.0, 3.0], ProcessingStage::Validation).unwrap_err();
        match err {
            DenoiseError::InvalidInput { stage, reason } => {
                assert_eq!(stage, ProcessingStage::Validation);
                assert!(reason.contains("3 samples"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
        assert!(validate_signal(&[1.0, 2.0, 3.0, 4.0], ProcessingStage::Validation).is_ok());
    }

    #[test]
    fn test_validate_signal_non_finite() {
        let samples = [0.0, 1.0, f64::INFINITY, 2.0, 3.0];
        let err = validate_signal(&samples, ProcessingStage::Validation).unwrap_err();
        assert!(err.to_string().contains("index 2"));

        let samples = [0.0, f64::NAN, 1.0, 2.0];
        assert!(validate_finite(&samples, ProcessingStage::Spectrum).is_err());
    }

    #[test]
    fn test_validate_same_length() {
        assert!(validate_same_length(4, 4, ProcessingStage::Reconstruction).is_ok());
        assert_eq!(
            validate_same_length(4, 5, ProcessingStage::Reconstruction),
            Err(DenoiseError::LengthMismatch {
                stage: ProcessingStage::Reconstruction,
                expected: 4,
                actual: 5,
            })
        );
    }
}
