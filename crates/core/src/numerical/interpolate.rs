//! 1-D linear interpolation over fixed samples.

use crate::error::{WakeError, WakeResult};

/// Piecewise-linear interpolant built from sampled `(x, y)` pairs.
///
/// Queries inside the sampled range interpolate linearly between the
/// bracketing samples; queries outside clamp to the boundary values, so the
/// interpolant is total over the reals. The Ainslie model relies on the
/// lower clamp (the centerline solution is undefined closer than the grid
/// start) and on the upper clamp for far-field points beyond the grid end.
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Builds an interpolant from samples.
    ///
    /// # Errors
    ///
    /// Returns [`WakeError::InvalidConfig`] unless there are at least two
    /// samples, the lengths match, the abscissae increase strictly, and all
    /// values are finite.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> WakeResult<Self> {
        if xs.len() != ys.len() {
            return Err(WakeError::InvalidConfig("interpolation sample lengths differ"));
        }
        if xs.len() < 2 {
            return Err(WakeError::InvalidConfig("interpolation needs at least two samples"));
        }
        if xs.windows(2).any(|w| !(w[1] > w[0])) {
            return Err(WakeError::InvalidConfig(
                "interpolation abscissae must increase strictly",
            ));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(WakeError::InvalidConfig("interpolation samples must be finite"));
        }
        Ok(Self { xs, ys })
    }

    /// Evaluates the interpolant at `x`, clamping outside the sampled range.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[n - 1] {
            return self.ys[n - 1];
        }

        // Index of the first sample strictly greater than x; the bracket is
        // [hi - 1, hi].
        let hi = self.xs.partition_point(|&xi| xi <= x);
        let (x0, x1) = (self.xs[hi - 1], self.xs[hi]);
        let (y0, y1) = (self.ys[hi - 1], self.ys[hi]);
        let alpha = (x - x0) / (x1 - x0);
        y0 + alpha * (y1 - y0)
    }

    /// Lower end of the sampled range.
    pub fn x_min(&self) -> f64 {
        self.xs[0]
    }

    /// Upper end of the sampled range.
    pub fn x_max(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
