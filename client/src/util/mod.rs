//! Browser helpers. Everything here degrades to a no-op during SSR.

pub mod browser;
pub mod rng;
