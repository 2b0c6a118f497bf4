//! Test signal generation: sums of tones with optional noise
//! Location: src/simulation/signal_generator.rs

use serde::{Deserialize, Serialize};

use super::noise_models::{NoiseModel, WhiteNoise};

/// One sinusoidal component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    /// Whole cycles across the generated signal.
    pub cycles: f64,
    pub amplitude: f64,
    pub phase: f64,
}

impl Tone {
    pub fn new(cycles: f64, amplitude: f64) -> Self {
        Self { cycles, amplitude, phase: 0.0 }
    }
}

/// Builds deterministic test signals
#[derive(Debug, Clone)]
pub struct SignalSimulator {
    length: usize,
    tones: Vec<Tone>,
    offset: f64,
    noise: Option<(f64, u64)>,
}

impl SignalSimulator {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            tones: Vec::new(),
            offset: 0.0,
            noise: None,
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tones.push(tone);
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// White Gaussian noise with the given standard deviation and seed.
    pub fn with_noise(mut self, std_dev: f64, seed: u64) -> Self {
        self.noise = Some((std_dev, seed));
        self
    }

    /// Noise-free component only.
    pub fn clean(&self) -> Vec<f64> {
        let n = self.length as f64;
        (0..self.length)
            .map(|i| {
                self.offset
                    + self
                        .tones
                        .iter()
                        .map(|tone| {
                            let angle = 2.0 * std::f64::consts::PI * tone.cycles * i as f64 / n;
                            tone.amplitude * (angle + tone.phase).sin()
                        })
                        .sum::<f64>()
            })
            .collect()
    }

    /// Clean component plus configured noise.
    pub fn generate(&self) -> Vec<f64> {
        let mut signal = self.clean();
        if let Some((std_dev, seed)) = self.noise {
            WhiteNoise::new(std_dev, seed).add_noise(&mut signal);
        }
        signal
    }
}
