//! Natural cubic spline interpolation

/// Natural cubic spline through a set of knots.
///
/// Second derivatives vanish at both end knots. Points outside the knot
/// range are extrapolated with the cubic of the nearest segment.
#[derive(Debug, Clone)]
pub struct NaturalCubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    second_derivs: Vec<f64>,
}

impl NaturalCubicSpline {
    /// Fit a spline. Returns `None` with fewer than two knots, mismatched
    /// lengths, or knot positions that are not strictly increasing.
    pub fn new(xs: &[f64], ys: &[f64]) -> Option<Self> {
        let m = xs.len();
        if m < 2 || ys.len() != m || xs.windows(2).any(|w| !(w[1] > w[0])) {
            return None;
        }

        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let mut second_derivs = vec![0.0; m];

        // Tridiagonal system over the interior knots, solved with the Thomas algorithm.
        let interior = m - 2;
        if interior > 0 {
            let mut diag = vec![0.0; interior];
            let mut upper = vec![0.0; interior];
            let mut rhs = vec![0.0; interior];

            for k in 0..interior {
                let i = k + 1;
                diag[k] = 2.0 * (h[i - 1] + h[i]);
                upper[k] = h[i];
                rhs[k] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
            }

            for k in 1..interior {
                let lower = h[k];
                let w = lower / diag[k - 1];
                diag[k] -= w * upper[k - 1];
                rhs[k] -= w * rhs[k - 1];
            }

            second_derivs[interior] = rhs[interior - 1] / diag[interior - 1];
            for k in (0..interior - 1).rev() {
                second_derivs[k + 1] = (rhs[k] - upper[k] * second_derivs[k + 2]) / diag[k];
            }
        }

        Some(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            second_derivs,
        })
    }

    /// Evaluate at `x`.
    #[cfg(test)]
    pub(crate) fn evaluate(&self, x: f64) -> f64 {
        let segment = match self.xs.partition_point(|&k| k <= x) {
            0 => 0,
            p => (p - 1).min(self.xs.len() - 2),
        };
        self.evaluate_segment(segment, x)
    }

    /// Evaluate at the integer positions `0..n`.
    pub fn sample(&self, n: usize) -> Vec<f64> {
        let last_segment = self.xs.len() - 2;
        let mut segment = 0;
        (0..n)
            .map(|i| {
                let x = i as f64;
                while segment < last_segment && x > self.xs[segment + 1] {
                    segment += 1;
                }
                self.evaluate_segment(segment, x)
            })
            .collect()
    }

    fn evaluate_segment(&self, j: usize, x: f64) -> f64 {
        let (x0, x1) = (self.xs[j], self.xs[j + 1]);
        let (y0, y1) = (self.ys[j], self.ys[j + 1]);
        let (m0, m1) = (self.second_derivs[j], self.second_derivs[j + 1]);
        let h = x1 - x0;
        let a = x1 - x;
        let b = x - x0;

        m0 * a * a * a / (6.0 * h)
            + m1 * b * b * b / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spline_passes_through_knots() {
        let xs = [-3.0, 1.0, 2.5, 6.0, 9.0];
        let ys = [0.5, -1.0, 2.0, 0.0, 4.0];
        let spline = NaturalCubicSpline::new(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert!((spline.evaluate(x) - y).abs() < 1e-10, "x={x}");
        }
    }

    #[test]
    fn test_spline_reproduces_line() {
        let xs = [0.0, 4.0, 9.0, 13.0];
        let ys = [1.0, 9.0, 19.0, 27.0]; // y = 2x + 1
        let spline = NaturalCubicSpline::new(&xs, &ys).unwrap();
        for (i, v) in spline.sample(14).into_iter().enumerate() {
            assert!((v - (2.0 * i as f64 + 1.0)).abs() < 1e-10, "i={i}: {v}");
        }
    }

    #[test]
    fn test_spline_constant_knots() {
        let spline = NaturalCubicSpline::new(&[-5.0, 3.0, 11.0, 20.0], &[1.5; 4]).unwrap();
        assert!(spline.sample(16).iter().all(|v| (v - 1.5).abs() < 1e-12));
    }

    #[test]
    fn test_two_knots_is_linear() {
        let spline = NaturalCubicSpline::new(&[0.0, 10.0], &[0.0, 5.0]).unwrap();
        assert!((spline.evaluate(4.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_matches_evaluate() {
        let xs = [-2.0, 0.5, 3.0, 4.0, 8.5];
        let ys = [1.0, 0.0, -2.0, 1.0, 0.5];
        let spline = NaturalCubicSpline::new(&xs, &ys).unwrap();
        let sampled = spline.sample(8);
        for (i, v) in sampled.iter().enumerate() {
            assert!((v - spline.evaluate(i as f64)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_invalid_knots() {
        assert!(NaturalCubicSpline::new(&[1.0], &[1.0]).is_none());
        assert!(NaturalCubicSpline::new(&[0.0, 0.0, 1.0], &[1.0, 2.0, 3.0]).is_none());
        assert!(NaturalCubicSpline::new(&[0.0, 1.0], &[1.0]).is_none());
    }
}
