//! SDSS galaxy-catalog selection and gridding geometry.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// SDSS catalog identification, box geometry, and mock settings.
///
/// `zeff` and the mock fields are only read in a few places downstream, but
/// they are part of the shared import surface and stay here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdssCatalog {
    /// Survey/sample identifier.
    pub survey: String,
    /// Bounding-box padding [Mpc].
    pub rpad: f64,
    /// Grid pixel size [Mpc].
    pub pixsize: f64,
    /// Lower redshift cut.
    pub zmin: f64,
    /// Upper redshift cut.
    pub zmax: f64,
    /// Effective redshift of the sample.
    pub zeff: f64,
    /// Mock catalog family.
    pub mock_type: String,
    /// Number of mock catalogs.
    pub nmocks: usize,
}

impl SdssCatalog {
    /// Reference catalog: CMASS North, QPM mocks.
    pub fn load() -> Result<Self, ConfigError> {
        Self::new(
            "CMASS_North".to_string(),
            500.0,
            10.0,
            0.43,
            0.7,
            0.57,
            "qpm".to_string(),
            1000,
        )
    }

    /// Construct and validate a catalog selection.
    pub fn new(
        survey: String,
        rpad: f64,
        pixsize: f64,
        zmin: f64,
        zmax: f64,
        zeff: f64,
        mock_type: String,
        nmocks: usize,
    ) -> Result<Self, ConfigError> {
        if !(zmin < zmax) {
            return Err(ConfigError::invalid(format!(
                "redshift cuts inverted: zmin = {zmin}, zmax = {zmax}"
            )));
        }
        if !(rpad > 0.0 && pixsize > 0.0) {
            return Err(ConfigError::invalid(format!(
                "box geometry must be positive: rpad = {rpad} Mpc, pixsize = {pixsize} Mpc"
            )));
        }
        if nmocks == 0 {
            return Err(ConfigError::invalid("nmocks must be at least 1"));
        }

        Ok(Self {
            survey,
            rpad,
            pixsize,
            zmin,
            zmax,
            zeff,
            mock_type,
            nmocks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog() {
        let c = SdssCatalog::load().unwrap();
        assert_eq!(c.survey, "CMASS_North");
        assert_eq!(c.rpad, 500.0);
        assert_eq!(c.pixsize, 10.0);
        assert_eq!(c.zmin, 0.43);
        assert_eq!(c.zmax, 0.7);
        assert_eq!(c.mock_type, "qpm");
        assert_eq!(c.nmocks, 1000);
    }

    #[test]
    fn rejects_bad_geometry() {
        let bad = SdssCatalog::new(
            "CMASS_North".into(),
            -500.0,
            10.0,
            0.43,
            0.7,
            0.57,
            "qpm".into(),
            1000,
        );
        assert!(bad.is_err());
    }
}
