//! Piecewise-linear interpolation with linear extrapolation.
//!
//! Both curve stages (anchor spreads -> annual grid, annual PD -> business-day
//! grid) go through this one type, so the edge policy lives in one place:
//!
//! - inside the node range: straight line between the bracketing nodes
//! - outside the node range: the first/last segment is extended (never clamped)
//! - on an interior node: the segment to the *left* of the node is used
//!
//! Segment lookup counts the nodes strictly below `x` (a left-side search) and
//! clamps the result to a valid segment. At the first node the result is `y[0]`
//! bit-for-bit; on any other node it is `y[k]` up to rounding.

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Build an interpolator over `(xs, ys)`.
    ///
    /// `xs` must be finite and strictly increasing with at least two nodes.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, AppError> {
        if xs.len() < 2 {
            return Err(AppError::configuration(format!(
                "Interpolation needs at least 2 nodes, got {}.",
                xs.len()
            )));
        }
        if xs.len() != ys.len() {
            return Err(AppError::configuration(format!(
                "Interpolation node mismatch: {} x values vs {} y values.",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().any(|x| !x.is_finite()) {
            return Err(AppError::configuration("Interpolation nodes must be finite."));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(AppError::configuration(
                "Interpolation nodes must be strictly increasing.",
            ));
        }
        Ok(Self { xs, ys })
    }

    /// Index of the left node of the segment used for `x`.
    fn segment(&self, x: f64) -> usize {
        let below = self.xs.partition_point(|&node| node < x);
        below.clamp(1, self.xs.len() - 1) - 1
    }

    /// Evaluate at `x`, extrapolating linearly outside the node range.
    pub fn eval(&self, x: f64) -> f64 {
        let lo = self.segment(x);
        let hi = lo + 1;
        let slope = (self.ys[hi] - self.ys[lo]) / (self.xs[hi] - self.xs[lo]);
        slope * (x - self.xs[lo]) + self.ys[lo]
    }

    /// Evaluate at every point of `at`, preserving order.
    pub fn eval_many(&self, at: &[f64]) -> Vec<f64> {
        at.iter().map(|&x| self.eval(x)).collect()
    }
}
