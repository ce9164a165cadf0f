//! Parameter groups shared across the kSZ analysis pipeline.
//!
//! Each group is a plain immutable struct with a fallible constructor that
//! computes any derived arrays and validates its invariants. The groups are
//! aggregated by [`crate::registry::GlobalParams`].

pub mod binning;
pub mod catalog;
pub mod halo;
pub mod surrogate;
pub mod survey;

pub use binning::KszBinning;
pub use catalog::SdssCatalog;
pub use halo::HaloModel;
pub use surrogate::SurrogateParams;
pub use survey::{ActConfig, Band, GalmaskConfig};
