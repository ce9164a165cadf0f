//! `ksz-params` library crate.
//!
//! Shared configuration for an SDSS x ACT kSZ cross-correlation pipeline:
//! spectral binning, halo-model grids, survey/instrument selection, catalog
//! geometry, and surrogate-simulation settings.
//!
//! Everything hangs off [`registry::GlobalParams`], built once with
//! [`registry::GlobalParams::load`] and immutable afterwards, so it can be
//! shared freely between pipeline stages and threads.

pub mod error;
pub mod math;
pub mod params;
pub mod registry;

pub use error::ConfigError;
pub use params::{
    ActConfig, Band, GalmaskConfig, HaloModel, KszBinning, SdssCatalog, SurrogateParams,
};
pub use registry::{GlobalParams, NAMES, ParamValue};
