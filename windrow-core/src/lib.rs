//! Board-agnostic core logic for the bale accumulator firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (switches, actuators, status, time)
//! - Phase definitions for the accumulation cycle
//! - The sequencer and per-phase handlers
//! - Unload cycle tracking
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod sequence;
pub mod state;
pub mod traits;
