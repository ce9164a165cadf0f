//! Surrogate-simulation settings.
//!
//! Surrogates are synthetic skies with a known injected signal, used to
//! calibrate the pipeline response. Runs use fnl in `[-fnl, 0, fnl]`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Amplitudes and counts for the surrogate simulation suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurrogateParams {
    /// Galaxy bias.
    pub bg: f64,
    /// Ad hoc multiplier on the halo-model P_ge, tuned so surrogates agree
    /// with data.
    pub bv: f64,
    /// Injected non-Gaussianity amplitude.
    pub fnl: f64,
    /// Number of surrogate realizations.
    pub num_surrogates: usize,
}

impl SurrogateParams {
    /// Reference suite: bg = 2.38, bv = 0.3, fnl = 250, 1000 realizations.
    pub fn load() -> Result<Self, ConfigError> {
        Self::new(2.38, 0.3, 250.0, 1000)
    }

    /// Construct and validate surrogate settings.
    pub fn new(bg: f64, bv: f64, fnl: f64, num_surrogates: usize) -> Result<Self, ConfigError> {
        if num_surrogates == 0 {
            return Err(ConfigError::invalid("num_surrogates must be at least 1"));
        }
        if !(bg.is_finite() && bv.is_finite() && fnl.is_finite()) {
            return Err(ConfigError::invalid(
                "surrogate amplitudes must be finite",
            ));
        }

        Ok(Self {
            bg,
            bv,
            fnl,
            num_surrogates,
        })
    }
}
