//! Additive noise models
//! Location: src/simulation/noise_models.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of additive noise samples
pub trait NoiseModel {
    fn next_sample(&mut self) -> f64;

    /// Add one noise sample to each element of `signal`.
    fn add_noise(&mut self, signal: &mut [f64]) {
        for x in signal.iter_mut() {
            *x += self.next_sample();
        }
    }
}

/// Zero-mean white Gaussian noise from a seeded generator
#[derive(Debug, Clone)]
pub struct WhiteNoise {
    std_dev: f64,
    rng: StdRng,
}

impl WhiteNoise {
    pub fn new(std_dev: f64, seed: u64) -> Self {
        Self {
            std_dev,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn box_muller_transform(&mut self) -> f64 {
        // u1 in (0, 1] so the logarithm stays finite
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}

impl NoiseModel for WhiteNoise {
    fn next_sample(&mut self) -> f64 {
        self.box_muller_transform() * self.std_dev
    }
}
