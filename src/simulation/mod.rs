//! Synthetic signal generation for tests and benchmarks
//! Location: src/simulation/mod.rs

pub mod noise_models;
pub mod signal_generator;

pub use noise_models::{NoiseModel, WhiteNoise};
pub use signal_generator::{SignalSimulator, Tone};
