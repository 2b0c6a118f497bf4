//! Descriptive statistics over sample slices
//!
//! All functions treat an empty slice as having zero mean, spread and energy
//! rather than producing NaN.

/// Arithmetic mean.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation (divides by `len`).
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let m = mean(samples);
    let variance = samples.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

/// Mean of squared samples.
pub fn mean_square(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|&x| x * x).sum::<f64>() / samples.len() as f64
}

/// Peak-to-peak range.
pub fn range(samples: &[f64]) -> f64 {
    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    if min.is_finite() && max.is_finite() {
        max - min
    } else {
        0.0
    }
}

/// Sum of absolute first differences.
pub fn total_variation(samples: &[f64]) -> f64 {
    samples.windows(2).map(|w| (w[1] - w[0]).abs()).sum()
}

/// Largest absolute element-wise difference.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
