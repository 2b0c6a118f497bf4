//! Local extrema detection

/// Interior local extrema of a signal as `(position, value)` pairs.
///
/// A plateau (run of equal samples) bounded by strictly lower neighbours is a
/// single maximum placed at the middle of the run; likewise for minima. Runs
/// touching either end of the signal are never extrema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extrema {
    pub maxima: Vec<(f64, f64)>,
    pub minima: Vec<(f64, f64)>,
}

impl Extrema {
    pub fn count(&self) -> usize {
        self.maxima.len() + self.minima.len()
    }

    /// Envelopes need at least one maximum and one minimum.
    pub fn supports_envelopes(&self) -> bool {
        !self.maxima.is_empty() && !self.minima.is_empty()
    }
}

/// Locate interior maxima and minima.
pub fn find_extrema(signal: &[f64]) -> Extrema {
    let n = signal.len();
    let mut extrema = Extrema::default();
    if n < 3 {
        return extrema;
    }

    let mut i = 1;
    while i < n - 1 {
        let value = signal[i];
        let mut end = i;
        while end + 1 < n && signal[end + 1] == value {
            end += 1;
        }
        if end == n - 1 {
            break;
        }

        let prev = signal[i - 1];
        let next = signal[end + 1];
        let position = (i + end) as f64 / 2.0;

        if value > prev && value > next {
            extrema.maxima.push((position, value));
        } else if value < prev && value < next {
            extrema.minima.push((position, value));
        }

        i = end + 1;
    }

    extrema
}

/// Number of interior extrema.
pub fn count_extrema(signal: &[f64]) -> usize {
    find_extrema(signal).count()
}

/// Reflect the first and last `count` points about the signal boundaries
/// (`0` and `len - 1`) so interpolation covers every sample.
pub fn mirror_points(points: &[(f64, f64)], len: usize, count: usize) -> Vec<(f64, f64)> {
    let take = count.min(points.len());
    let right_edge = (len.saturating_sub(1)) as f64;

    let mut knots = Vec::with_capacity(points.len() + 2 * take);
    knots.extend(points[..take].iter().rev().map(|&(x, y)| (-x, y)));
    knots.extend_from_slice(points);
    knots.extend(
        points[points.len() - take..]
            .iter()
            .rev()
            .map(|&(x, y)| (2.0 * right_edge - x, y)),
    );
    knots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_extrema() {
        let signal = [0.0, 1.0, 0.0, 2.0, 0.0, -1.0, 0.5];
        let extrema = find_extrema(&signal);
        assert_eq!(extrema.maxima, vec![(1.0, 1.0), (3.0, 2.0)]);
        assert_eq!(extrema.minima, vec![(2.0, 0.0), (5.0, -1.0)]);
        assert_eq!(extrema.count(), 4);
    }

    #[test]
    fn test_plateau_maximum_at_midpoint() {
        let signal = [0.0, 1.0, 1.0, 1.0, 0.0];
        let extrema = find_extrema(&signal);
        assert_eq!(extrema.maxima, vec![(2.0, 1.0)]);
        assert!(extrema.minima.is_empty());
    }

    #[test]
    fn test_step_is_not_extremum() {
        let signal = [0.0, 1.0, 1.0, 2.0, 3.0];
        assert_eq!(count_extrema(&signal), 0);
    }

    #[test]
    fn test_monotonic_and_flat() {
        let ramp: Vec<f64> = (0..20).map(|i| i as f64).collect();
        assert_eq!(count_extrema(&ramp), 0);
        assert_eq!(count_extrema(&[2.0; 10]), 0);
        assert_eq!(count_extrema(&[1.0, 2.0]), 0);
    }

    #[test]
    fn test_edge_plateau_ignored() {
        let signal = [1.0, 1.0, 0.0, 1.0, 1.0];
        let extrema = find_extrema(&signal);
        assert_eq!(extrema.minima, vec![(2.0, 0.0)]);
        assert!(extrema.maxima.is_empty());
    }

    #[test]
    fn test_mirror_points() {
        let points = [(2.0, 1.0), (6.0, 1.5), (9.0, 0.5)];
        let knots = mirror_points(&points, 11, 2);
        let xs: Vec<f64> = knots.iter().map(|k| k.0).collect();
        assert_eq!(xs, vec![-6.0, -2.0, 2.0, 6.0, 9.0, 11.0, 14.0]);
        assert_eq!(knots[0].1, 1.5);
        assert_eq!(knots[6].1, 1.5);
    }

    #[test]
    fn test_mirror_single_point() {
        let knots = mirror_points(&[(3.0, 2.0)], 8, 2);
        let xs: Vec<f64> = knots.iter().map(|k| k.0).collect();
        assert_eq!(xs, vec![-3.0, 3.0, 11.0]);
    }
}
