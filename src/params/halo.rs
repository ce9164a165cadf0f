//! Halo-model evaluation grids and cosmological scalars.
//!
//! These feed the fiducial `P_ge` and `P_gg` spectra used to build the
//! galaxy filter. The wavenumber and halo-mass axes are geometric grids;
//! both are strictly increasing and strictly positive by construction.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::geomspace;

/// Halo-model grids plus the redshift/density scalars of the galaxy sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HaloModel {
    /// Wavenumber grid [Mpc^-1].
    pub ks: Vec<f64>,
    /// Halo mass grid [Msun].
    pub ms: Vec<f64>,
    /// Lower redshift bound of the sample.
    pub min_z: f64,
    /// Upper redshift bound of the sample.
    pub max_z: f64,
    /// Effective redshift at which spectra are evaluated.
    pub z_eff: f64,
    /// Galaxy number density [Mpc^-3], rough CMASS value.
    pub n_gal: f64,
}

impl HaloModel {
    /// Reference grids: k in geomspace(1e-5, 100, 1000), M in
    /// geomspace(2e10, 1e17, 40), CMASS redshift range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::new(
            geomspace(1e-5, 100.0, 1000)?,
            geomspace(2e10, 1e17, 40)?,
            0.43,
            0.7,
            0.55,
            1e-4,
        )
    }

    /// Construct and validate a halo-model parameter set.
    ///
    /// Both grids must be strictly positive and strictly increasing.
    pub fn new(
        ks: Vec<f64>,
        ms: Vec<f64>,
        min_z: f64,
        max_z: f64,
        z_eff: f64,
        n_gal: f64,
    ) -> Result<Self, ConfigError> {
        validate_grid("wavenumber grid", &ks)?;
        validate_grid("mass grid", &ms)?;
        if !(min_z < max_z) {
            return Err(ConfigError::invalid(format!(
                "redshift range inverted: min_z = {min_z}, max_z = {max_z}"
            )));
        }
        if !(n_gal > 0.0) {
            return Err(ConfigError::invalid(format!(
                "galaxy number density must be positive, got {n_gal}"
            )));
        }

        Ok(Self {
            ks,
            ms,
            min_z,
            max_z,
            z_eff,
            n_gal,
        })
    }
}

fn validate_grid(what: &str, grid: &[f64]) -> Result<(), ConfigError> {
    if grid.is_empty() {
        return Err(ConfigError::invalid(format!("{what} is empty")));
    }
    if !grid.iter().all(|v| v.is_finite() && *v > 0.0) {
        return Err(ConfigError::invalid(format!(
            "{what} must be strictly positive"
        )));
    }
    if !grid.windows(2).all(|p| p[1] > p[0]) {
        return Err(ConfigError::invalid(format!(
            "{what} must be strictly increasing"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_grid_shapes() {
        let h = HaloModel::load().unwrap();
        assert_eq!(h.ks.len(), 1000);
        assert_eq!(h.ms.len(), 40);
        assert_eq!(h.ks[0], 1e-5);
        assert_eq!(*h.ks.last().unwrap(), 100.0);
        assert_eq!(h.ms[0], 2e10);
        assert_eq!(*h.ms.last().unwrap(), 1e17);
    }

    #[test]
    fn grids_positive_and_increasing() {
        let h = HaloModel::load().unwrap();
        for grid in [&h.ks, &h.ms] {
            assert!(grid.iter().all(|v| *v > 0.0));
            assert!(grid.windows(2).all(|p| p[1] > p[0]));
        }
    }

    #[test]
    fn rejects_inverted_redshift_range() {
        let err = HaloModel::new(vec![1.0], vec![1.0], 0.7, 0.43, 0.55, 1e-4);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_bad_grids() {
        let ms = vec![2e10, 1e17];
        // Non-increasing.
        assert!(HaloModel::new(vec![1.0, 1.0], ms.clone(), 0.43, 0.7, 0.55, 1e-4).is_err());
        assert!(HaloModel::new(vec![2.0, 1.0], ms.clone(), 0.43, 0.7, 0.55, 1e-4).is_err());
        // Non-positive or non-finite.
        assert!(HaloModel::new(vec![0.0, 1.0], ms.clone(), 0.43, 0.7, 0.55, 1e-4).is_err());
        assert!(HaloModel::new(vec![-1.0, 1.0], ms.clone(), 0.43, 0.7, 0.55, 1e-4).is_err());
        assert!(HaloModel::new(vec![1.0, f64::NAN], ms.clone(), 0.43, 0.7, 0.55, 1e-4).is_err());
        // Empty.
        assert!(HaloModel::new(vec![], ms, 0.43, 0.7, 0.55, 1e-4).is_err());
    }
}
