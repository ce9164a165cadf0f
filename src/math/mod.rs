//! Mathematical utilities: deterministic grid spacing.

pub mod spacing;

pub use spacing::*;
