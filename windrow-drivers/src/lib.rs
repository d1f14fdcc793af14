//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in windrow-core for the wagon's I/O:
//!
//! - Debounced limit/position switch inputs
//! - Relay outputs (solenoid valves and chain clutches)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod relay;
pub mod switch;
