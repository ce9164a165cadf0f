//! The parameter registry: one immutable struct holding every shared value.
//!
//! The registry is built once with [`GlobalParams::load`] and passed by
//! reference into each pipeline stage, instead of living as hidden global
//! module state. Typed access goes through the group fields; name-based
//! access (the historical import surface, one entry per exported binding)
//! goes through [`GlobalParams::get`].
//!
//! Snapshot tooling that reads registry JSON back in must enable
//! serde_json's `float_roundtrip` feature: the default float parser is
//! only ~1-ulp accurate, which breaks bitwise equality of the derived
//! grids.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::{ActConfig, GalmaskConfig, HaloModel, KszBinning, SdssCatalog, SurrogateParams};

/// Every registered parameter name, i.e. the stable import surface.
///
/// Renaming or removing an entry is a breaking change for downstream
/// consumers.
pub const NAMES: &[&str] = &[
    "ksz_lmin",
    "ksz_lmax",
    "nkbins",
    "kbin_edges",
    "kbin_centers",
    "hmodel_ks",
    "hmodel_ms",
    "hmodel_minz",
    "hmodel_maxz",
    "hmodel_zeff",
    "hmodel_ngal",
    "galmask_sky_percentage",
    "galmask_apodization",
    "act_dr",
    "act_rms_threshold",
    "sdss_survey",
    "sdss_rpad",
    "sdss_pixsize",
    "sdss_zmin",
    "sdss_zmax",
    "sdss_zeff",
    "sdss_mock_type",
    "sdss_nmocks",
    "surr_bg",
    "surr_bv",
    "surr_fnl",
    "num_surrogates",
];

/// A borrowed view of one registered parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue<'a> {
    Int(i64),
    Float(f64),
    Str(&'a str),
    Floats(&'a [f64]),
    /// Frequency [GHz] to noise threshold [uK-arcmin].
    Thresholds(&'a std::collections::BTreeMap<u32, f64>),
}

/// All shared pipeline configuration, loaded once and read-only after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalParams {
    pub ksz: KszBinning,
    pub hmodel: HaloModel,
    pub galmask: GalmaskConfig,
    pub act: ActConfig,
    pub sdss: SdssCatalog,
    pub surrogate: SurrogateParams,
}

impl GlobalParams {
    /// Load the reference configuration, computing derived arrays and
    /// validating every group. Fails fast on any inconsistency.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            ksz: KszBinning::load()?,
            hmodel: HaloModel::load()?,
            galmask: GalmaskConfig::load(),
            act: ActConfig::load()?,
            sdss: SdssCatalog::load()?,
            surrogate: SurrogateParams::load()?,
        })
    }

    /// Look up a parameter by its registered name.
    pub fn get(&self, name: &str) -> Result<ParamValue<'_>, ConfigError> {
        let value = match name {
            "ksz_lmin" => ParamValue::Int(self.ksz.lmin as i64),
            "ksz_lmax" => ParamValue::Int(self.ksz.lmax as i64),
            "nkbins" => ParamValue::Int(self.ksz.nkbins as i64),
            "kbin_edges" => ParamValue::Floats(&self.ksz.kbin_edges),
            "kbin_centers" => ParamValue::Floats(&self.ksz.kbin_centers),

            "hmodel_ks" => ParamValue::Floats(&self.hmodel.ks),
            "hmodel_ms" => ParamValue::Floats(&self.hmodel.ms),
            "hmodel_minz" => ParamValue::Float(self.hmodel.min_z),
            "hmodel_maxz" => ParamValue::Float(self.hmodel.max_z),
            "hmodel_zeff" => ParamValue::Float(self.hmodel.z_eff),
            "hmodel_ngal" => ParamValue::Float(self.hmodel.n_gal),

            "galmask_sky_percentage" => ParamValue::Int(self.galmask.sky_percentage as i64),
            "galmask_apodization" => ParamValue::Float(self.galmask.apodization),

            "act_dr" => ParamValue::Int(self.act.data_release as i64),
            "act_rms_threshold" => ParamValue::Thresholds(&self.act.rms_threshold),

            "sdss_survey" => ParamValue::Str(self.sdss.survey.as_str()),
            "sdss_rpad" => ParamValue::Float(self.sdss.rpad),
            "sdss_pixsize" => ParamValue::Float(self.sdss.pixsize),
            "sdss_zmin" => ParamValue::Float(self.sdss.zmin),
            "sdss_zmax" => ParamValue::Float(self.sdss.zmax),
            "sdss_zeff" => ParamValue::Float(self.sdss.zeff),
            "sdss_mock_type" => ParamValue::Str(self.sdss.mock_type.as_str()),
            "sdss_nmocks" => ParamValue::Int(self.sdss.nmocks as i64),

            "surr_bg" => ParamValue::Float(self.surrogate.bg),
            "surr_bv" => ParamValue::Float(self.surrogate.bv),
            "surr_fnl" => ParamValue::Float(self.surrogate.fnl),
            "num_surrogates" => ParamValue::Int(self.surrogate.num_surrogates as i64),

            other => return Err(ConfigError::unknown(other)),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_name_resolves() {
        let params = GlobalParams::load().unwrap();
        for name in NAMES {
            assert!(params.get(name).is_ok(), "name {name} should resolve");
        }
    }

    #[test]
    fn unknown_name_fails() {
        let params = GlobalParams::load().unwrap();
        match params.get("ksz_lmid") {
            Err(ConfigError::UnknownParameter(name)) => assert_eq!(name, "ksz_lmid"),
            other => panic!("expected UnknownParameter, got {other:?}"),
        }
    }

    #[test]
    fn scalar_values_match_reference() {
        let params = GlobalParams::load().unwrap();
        assert_eq!(params.get("ksz_lmin").unwrap(), ParamValue::Int(1500));
        assert_eq!(params.get("ksz_lmax").unwrap(), ParamValue::Int(8000));
        assert_eq!(params.get("act_dr").unwrap(), ParamValue::Int(5));
        assert_eq!(
            params.get("sdss_survey").unwrap(),
            ParamValue::Str("CMASS_North")
        );
        assert_eq!(params.get("surr_bg").unwrap(), ParamValue::Float(2.38));
        assert_eq!(
            params.get("num_surrogates").unwrap(),
            ParamValue::Int(1000)
        );
    }

    #[test]
    fn reloading_is_bitwise_deterministic() {
        let a = GlobalParams::load().unwrap();
        let b = GlobalParams::load().unwrap();
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a.ksz.kbin_edges), bits(&b.ksz.kbin_edges));
        assert_eq!(bits(&a.ksz.kbin_centers), bits(&b.ksz.kbin_centers));
        assert_eq!(bits(&a.hmodel.ks), bits(&b.hmodel.ks));
        assert_eq!(bits(&a.hmodel.ms), bits(&b.hmodel.ms));
    }

    #[test]
    fn json_round_trip_preserves_derived_arrays() {
        let params = GlobalParams::load().unwrap();
        let json = serde_json::to_string(&params).unwrap();
        let back: GlobalParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);

        // Bitwise, not just ==: the geometric grids contain values whose
        // shortest decimal form only parses back exactly with serde_json's
        // float_roundtrip feature enabled.
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&back.hmodel.ks), bits(&params.hmodel.ks));
        assert_eq!(bits(&back.hmodel.ms), bits(&params.hmodel.ms));
        assert_eq!(bits(&back.ksz.kbin_edges), bits(&params.ksz.kbin_edges));
        assert_eq!(bits(&back.ksz.kbin_centers), bits(&params.ksz.kbin_centers));
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GlobalParams>();
    }
}
