//! Spectral binning for the kSZ velocity-reconstruction estimator.
//!
//! The CMB multipole range `[lmin, lmax]` selects the small-scale modes used
//! for reconstruction; the wavenumber axis is binned uniformly over
//! `[0, 0.3]` Mpc^-1 into `nkbins` bins.
//!
//! Invariants, checked at construction:
//! - `edges.len() == nkbins + 1`, strictly increasing, spanning exactly
//!   `[K_MIN, K_MAX]`
//! - `centers[i] = (edges[i] + edges[i+1]) / 2`

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::{bin_centers, linspace};

/// Lower edge of the wavenumber binning [Mpc^-1].
pub const K_MIN: f64 = 0.0;

/// Upper edge of the wavenumber binning [Mpc^-1].
pub const K_MAX: f64 = 0.3;

/// Default number of wavenumber bins.
pub const DEFAULT_NKBINS: usize = 100;

/// kSZ spectral binning: multipole bounds plus the derived wavenumber bins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KszBinning {
    /// Minimum CMB multipole used for reconstruction.
    pub lmin: u32,
    /// Maximum CMB multipole used for reconstruction.
    pub lmax: u32,
    /// Number of wavenumber bins.
    pub nkbins: usize,
    /// Bin edges [Mpc^-1], length `nkbins + 1`.
    pub kbin_edges: Vec<f64>,
    /// Bin centers [Mpc^-1], length `nkbins`.
    pub kbin_centers: Vec<f64>,
}

impl KszBinning {
    /// Reference binning: `lmin = 1500`, `lmax = 8000`, 100 bins.
    pub fn load() -> Result<Self, ConfigError> {
        Self::with_nkbins(DEFAULT_NKBINS)
    }

    /// Reference multipole range with a custom bin count.
    pub fn with_nkbins(nkbins: usize) -> Result<Self, ConfigError> {
        Self::new(1500, 8000, nkbins)
    }

    /// Construct and validate a binning.
    pub fn new(lmin: u32, lmax: u32, nkbins: usize) -> Result<Self, ConfigError> {
        if nkbins == 0 {
            return Err(ConfigError::invalid("nkbins must be at least 1"));
        }
        if lmin >= lmax {
            return Err(ConfigError::invalid(format!(
                "multipole range inverted: lmin = {lmin}, lmax = {lmax}"
            )));
        }

        let kbin_edges = linspace(K_MIN, K_MAX, nkbins + 1)?;
        let kbin_centers = bin_centers(&kbin_edges);

        Ok(Self {
            lmin,
            lmax,
            nkbins,
            kbin_edges,
            kbin_centers,
        })
    }
}
