// src/processing/types.rs
//! Core data types shared by every pipeline stage

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{DenoiseResult, ProcessingStage};
use crate::utils::validation::validate_finite;

/// Ordered sequence of finite samples, indexed by frequency bin or time step.
///
/// A `Signal` is never mutated once a stage has produced it; stages build new
/// signals instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signal(Vec<f64>);

impl Signal {
    /// Wrap `samples`, rejecting NaN and infinite values.
    pub fn new(samples: Vec<f64>) -> DenoiseResult<Self> {
        validate_finite(&samples, ProcessingStage::Validation)?;
        Ok(Self(samples))
    }

    /// Copy a slice into a new signal.
    pub fn from_slice(samples: &[f64]) -> DenoiseResult<Self> {
        Self::new(samples.to_vec())
    }

    /// Stages that only ever combine finite signals skip re-validation.
    pub(crate) fn from_finite(samples: Vec<f64>) -> Self {
        debug_assert!(samples.iter().all(|x| x.is_finite()));
        Self(samples)
    }

    /// All-zero signal of `len` samples.
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Signal {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Signal> for Vec<f64> {
    fn from(signal: Signal) -> Self {
        signal.0
    }
}

impl TryFrom<Vec<f64>> for Signal {
    type Error = crate::error::DenoiseError;

    fn try_from(samples: Vec<f64>) -> DenoiseResult<Self> {
        Signal::new(samples)
    }
}
