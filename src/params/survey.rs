//! CMB-side survey configuration: Planck galactic mask and ACT map noise.
//!
//! The ACT noise thresholds are keyed by observing band. Band is an enum so
//! an unconfigured frequency cannot be compiled into field access; runtime
//! integers (e.g. read from a catalog header) go through [`Band::from_ghz`]
//! or [`ActConfig::rms_threshold`], which fail with `UnknownParameter`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Planck galactic-mask selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalmaskConfig {
    /// Sky fraction retained by the mask, in percent.
    pub sky_percentage: u32,
    /// Mask apodization scale [deg]; 0 disables apodization.
    pub apodization: f64,
}

impl GalmaskConfig {
    /// Reference mask: 70% sky, no apodization.
    pub fn load() -> Self {
        Self {
            sky_percentage: 70,
            apodization: 0.0,
        }
    }
}

/// ACT observing bands carried by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    /// 90 GHz (f090).
    F090,
    /// 150 GHz (f150).
    F150,
}

impl Band {
    /// Both configured bands, in frequency order.
    pub const ALL: [Band; 2] = [Band::F090, Band::F150];

    /// Band center frequency in GHz.
    pub fn ghz(self) -> u32 {
        match self {
            Band::F090 => 90,
            Band::F150 => 150,
        }
    }

    /// Resolve a runtime frequency to a configured band.
    pub fn from_ghz(freq_ghz: u32) -> Result<Band, ConfigError> {
        match freq_ghz {
            90 => Ok(Band::F090),
            150 => Ok(Band::F150),
            other => Err(ConfigError::unknown(format!(
                "act_rms_threshold[{other}]"
            ))),
        }
    }
}

/// ACT map selection: data release and per-band noise cuts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActConfig {
    /// ACT data release number.
    pub data_release: u32,
    /// Map white-noise cut per band [uK-arcmin], keyed by frequency in GHz.
    pub rms_threshold: BTreeMap<u32, f64>,
}

impl ActConfig {
    /// Reference selection: DR5, 70 uK-arcmin cut at 90 and 150 GHz.
    pub fn load() -> Result<Self, ConfigError> {
        let rms_threshold = Band::ALL.iter().map(|b| (b.ghz(), 70.0)).collect();
        Self::new(5, rms_threshold)
    }

    /// Construct and validate an ACT selection.
    ///
    /// The threshold map must cover exactly the configured bands, with
    /// finite positive values.
    pub fn new(data_release: u32, rms_threshold: BTreeMap<u32, f64>) -> Result<Self, ConfigError> {
        for band in Band::ALL {
            match rms_threshold.get(&band.ghz()) {
                Some(v) if v.is_finite() && *v > 0.0 => {}
                Some(v) => {
                    return Err(ConfigError::invalid(format!(
                        "rms threshold at {} GHz must be finite and positive, got {v}",
                        band.ghz()
                    )));
                }
                None => {
                    return Err(ConfigError::invalid(format!(
                        "missing rms threshold for {} GHz",
                        band.ghz()
                    )));
                }
            }
        }
        for freq in rms_threshold.keys() {
            Band::from_ghz(*freq).map_err(|_| {
                ConfigError::invalid(format!("rms threshold for unconfigured band {freq} GHz"))
            })?;
        }

        Ok(Self {
            data_release,
            rms_threshold,
        })
    }

    /// Noise threshold [uK-arcmin] for a runtime frequency in GHz.
    ///
    /// Fails with `UnknownParameter` for any frequency other than 90 or 150.
    pub fn rms_threshold(&self, freq_ghz: u32) -> Result<f64, ConfigError> {
        let band = Band::from_ghz(freq_ghz)?;
        Ok(self.rms_threshold[&band.ghz()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn reference_thresholds() {
        let act = ActConfig::load().unwrap();
        assert_eq!(act.data_release, 5);
        assert_eq!(act.rms_threshold(90).unwrap(), 70.0);
        assert_eq!(act.rms_threshold(150).unwrap(), 70.0);
    }

    #[test]
    fn unknown_frequency_fails() {
        let act = ActConfig::load().unwrap();
        for freq in [0, 89, 98, 220] {
            match act.rms_threshold(freq) {
                Err(ConfigError::UnknownParameter(_)) => {}
                other => panic!("expected UnknownParameter for {freq} GHz, got {other:?}"),
            }
        }
    }

    #[test]
    fn band_round_trips_ghz() {
        for band in Band::ALL {
            assert_eq!(Band::from_ghz(band.ghz()).unwrap(), band);
        }
    }

    #[test]
    fn rejects_incomplete_or_bad_threshold_map() {
        let mut m = BTreeMap::new();
        m.insert(90, 70.0);
        assert!(ActConfig::new(5, m.clone()).is_err());

        m.insert(150, -1.0);
        assert!(ActConfig::new(5, m.clone()).is_err());

        m.insert(150, 70.0);
        m.insert(220, 70.0);
        assert!(ActConfig::new(5, m).is_err());
    }
}
