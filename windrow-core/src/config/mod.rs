//! Configuration types
//!
//! Board-agnostic configuration structures. Everything here is fixed
//! for the process lifetime; the wagon has no runtime reconfiguration
//! and nothing persists across power cycles.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
