//! Linear sample grid construction and elementwise function evaluation.

use crate::registry::Transform;

/// Number of sample points per curve.
pub const SAMPLE_POINTS: usize = 500;

/// Evenly spaced values over `[from, to]`, both endpoints inclusive.
///
/// `from` may exceed `to`, which produces a descending sequence; the caller
/// decides what a reversed range means.
pub fn linspace(from: f64, to: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![from],
        n => {
            let step = (to - from) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        // Land exactly on the endpoint despite accumulated
                        // floating point error in the step.
                        to
                    } else {
                        from + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// The standard sample grid for a plot request
pub fn sample_grid(from: f64, to: f64) -> Vec<f64> {
    linspace(from, to, SAMPLE_POINTS)
}

/// Apply a registered transform elementwise to a sample grid
pub fn evaluate(transform: Transform, xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| transform(x)).collect()
}
