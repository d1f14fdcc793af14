//! Machine phase definitions
//!
//! The accumulation cycle is explicit, finite, and deterministic.

pub mod phase;

pub use phase::Phase;
