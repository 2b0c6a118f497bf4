// src/processing/channels.rs
//! Multi-channel recordings collapsed to a single signal

use ndarray::{Array2, Axis};

use crate::error::{DenoiseError, DenoiseResult, ProcessingStage};
use crate::processing::types::Signal;

/// Stack equal-length channel rows into a `channels x samples` matrix.
pub fn channels_from_rows(rows: &[Vec<f64>]) -> DenoiseResult<Array2<f64>> {
    let samples = rows.first().map(Vec::len).unwrap_or(0);
    if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != samples) {
        return Err(DenoiseError::invalid_input(
            ProcessingStage::Validation,
            format!("channel {} has {} samples, expected {}", index, row.len(), samples),
        ));
    }

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), samples), flat)
        .map_err(|e| DenoiseError::invalid_input(ProcessingStage::Validation, e.to_string()))
}

/// Per-sample mean across channels (rows).
pub fn average_channels(channels: &Array2<f64>) -> DenoiseResult<Signal> {
    if channels.nrows() == 0 || channels.ncols() == 0 {
        return Err(DenoiseError::invalid_input(
            ProcessingStage::Validation,
            format!(
                "channel matrix is empty ({} channels x {} samples)",
                channels.nrows(),
                channels.ncols()
            ),
        ));
    }

    let mean = channels.mean_axis(Axis(0)).ok_or_else(|| {
        DenoiseError::invalid_input(ProcessingStage::Validation, "cannot average channels")
    })?;
    Signal::new(mean.to_vec())
}
