//! Uniform and geometric grid construction.
//!
//! Both spacings are computed from the index directly
//! (`start + step * i`, never a running sum), so:
//!
//! - rounding error does not accumulate across the grid
//! - the same inputs always produce bitwise-identical output
//! - both endpoints are set exactly, not approximately
//!
//! Geometric spacing works in log space: `v[i] = exp(ln(start) + step * i)`.

use crate::error::ConfigError;

/// `n` evenly spaced values over `[start, stop]`, endpoints included.
///
/// Fails if `n < 2` or `stop <= start`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Result<Vec<f64>, ConfigError> {
    if n < 2 {
        return Err(ConfigError::invalid(format!(
            "linspace needs at least 2 points, got {n}"
        )));
    }
    if !(stop > start) {
        return Err(ConfigError::invalid(format!(
            "linspace bounds inverted or degenerate: [{start}, {stop}]"
        )));
    }

    let step = (stop - start) / (n - 1) as f64;
    let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    // Pin both endpoints exactly.
    values[0] = start;
    values[n - 1] = stop;
    Ok(values)
}

/// `n` geometrically spaced values over `[start, stop]`, endpoints included.
///
/// Fails if `n < 2`, either bound is non-positive, or `stop <= start`.
pub fn geomspace(start: f64, stop: f64, n: usize) -> Result<Vec<f64>, ConfigError> {
    if n < 2 {
        return Err(ConfigError::invalid(format!(
            "geomspace needs at least 2 points, got {n}"
        )));
    }
    if !(start > 0.0 && stop > 0.0) {
        return Err(ConfigError::invalid(format!(
            "geomspace bounds must be strictly positive: [{start}, {stop}]"
        )));
    }
    if !(stop > start) {
        return Err(ConfigError::invalid(format!(
            "geomspace bounds inverted or degenerate: [{start}, {stop}]"
        )));
    }

    let log_start = start.ln();
    let step = (stop.ln() - log_start) / (n - 1) as f64;
    let mut values: Vec<f64> = (0..n).map(|i| (log_start + step * i as f64).exp()).collect();
    values[0] = start;
    values[n - 1] = stop;
    Ok(values)
}

/// Midpoints of consecutive edge pairs: `centers[i] = (edges[i] + edges[i+1]) / 2`.
pub fn bin_centers(edges: &[f64]) -> Vec<f64> {
    edges.windows(2).map(|pair| (pair[0] + pair[1]) / 2.0).collect()
}
