//! Envelope estimation strategies
//!
//! Sifting only needs the upper and lower envelopes of the working signal.
//! [`EnvelopeStrategy`] keeps the interpolation scheme replaceable without
//! touching the sifting or cutoff logic.

use std::fmt::Debug;

use super::extrema::{find_extrema, mirror_points, Extrema};
use super::spline::NaturalCubicSpline;
use crate::config::constants::emd::DEFAULT_MIRROR_EXTREMA;

/// Upper and lower envelopes, each the length of the source signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelopes {
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

impl Envelopes {
    /// Point-wise mean of the two envelopes.
    pub fn mean(&self) -> Vec<f64> {
        self.upper
            .iter()
            .zip(self.lower.iter())
            .map(|(u, l)| 0.5 * (u + l))
            .collect()
    }
}

/// Interpolation scheme used to build envelopes through local extrema.
pub trait EnvelopeStrategy: Send + Sync + Debug {
    /// Envelopes of `signal`, or `None` when it lacks the extrema to build them.
    fn compute_envelopes(&self, signal: &[f64]) -> Option<Envelopes>;
}

/// Natural cubic spline through boundary-mirrored extrema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSplineEnvelope {
    pub mirror_extrema: usize,
}

impl Default for CubicSplineEnvelope {
    fn default() -> Self {
        Self { mirror_extrema: DEFAULT_MIRROR_EXTREMA }
    }
}

impl EnvelopeStrategy for CubicSplineEnvelope {
    fn compute_envelopes(&self, signal: &[f64]) -> Option<Envelopes> {
        let extrema = usable_extrema(signal)?;
        let n = signal.len();

        let fit = |points: &[(f64, f64)]| -> Option<Vec<f64>> {
            let (xs, ys) = unzip_knots(mirror_points(points, n, self.mirror_extrema));
            NaturalCubicSpline::new(&xs, &ys).map(|spline| spline.sample(n))
        };

        Some(Envelopes {
            upper: fit(&extrema.maxima)?,
            lower: fit(&extrema.minima)?,
        })
    }
}

/// Straight lines between boundary-mirrored extrema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEnvelope {
    pub mirror_extrema: usize,
}

impl Default for LinearEnvelope {
    fn default() -> Self {
        Self { mirror_extrema: DEFAULT_MIRROR_EXTREMA }
    }
}

impl EnvelopeStrategy for LinearEnvelope {
    fn compute_envelopes(&self, signal: &[f64]) -> Option<Envelopes> {
        let extrema = usable_extrema(signal)?;
        let n = signal.len();

        let fit = |points: &[(f64, f64)]| {
            let (xs, ys) = unzip_knots(mirror_points(points, n, self.mirror_extrema));
            linear_sample(&xs, &ys, n)
        };

        Some(Envelopes {
            upper: fit(&extrema.maxima),
            lower: fit(&extrema.minima),
        })
    }
}

fn usable_extrema(signal: &[f64]) -> Option<Extrema> {
    let extrema = find_extrema(signal);
    extrema.supports_envelopes().then_some(extrema)
}

fn unzip_knots(knots: Vec<(f64, f64)>) -> (Vec<f64>, Vec<f64>) {
    knots.into_iter().unzip()
}

/// Piecewise-linear interpolation at `0..n`, holding end values outside the knots.
fn linear_sample(xs: &[f64], ys: &[f64], n: usize) -> Vec<f64> {
    let last = xs.len() - 1;
    let mut segment = 0;
    (0..n)
        .map(|i| {
            let x = i as f64;
            if x <= xs[0] {
                return ys[0];
            }
            if x >= xs[last] {
                return ys[last];
            }
            while x > xs[segment + 1] {
                segment += 1;
            }
            let t = (x - xs[segment]) / (xs[segment + 1] - xs[segment]);
            ys[segment] + t * (ys[segment + 1] - ys[segment])
        })
        .collect()
}
