// src/processing/mod.rs
//! Signal processing stages for EMD denoising

pub mod channels;
pub mod cutoff;
pub mod emd;
pub mod energy;
pub mod normalizer;
pub mod pipeline;
pub mod reconstruct;
pub mod recording;
pub mod spectrum;
pub mod types;

pub use channels::{average_channels, channels_from_rows};
pub use cutoff::select_cutoff;
pub use emd::{
    CubicSplineEnvelope, EnvelopeStrategy, Envelopes, ImfInfo, LinearEnvelope, ModeDecomposer,
    ModeSet, SiftStop,
};
pub use energy::{energy_score, score_modes};
pub use normalizer::{normalize, Normalization};
pub use pipeline::{DenoiseOutcome, DenoiseReport, EmdDenoiser};
pub use reconstruct::reconstruct;
pub use recording::{RecordingAnalyzer, RecordingReport};
pub use spectrum::{FrequencyConverter, Spectrum};
pub use types::Signal;
