//! Common utility functions for emd-denoise
//!
//! - descriptive statistics over sample slices
//! - configuration and signal boundary validation
//!
//! Limits and thresholds live in [`crate::config::constants`].

pub mod stats;
pub mod validation;

pub use validation::{
    validate_finite,
    validate_range,
    validate_same_length,
    validate_signal,
    ValidationError,
    ValidationResult,
};
