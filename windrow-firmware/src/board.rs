//! Board definition for the wagon controller
//!
//! One fixed board: an RP2040 carrier with eight switch inputs and a
//! six-channel relay board. Switches are normally-open to ground with
//! internal pull-ups; the relay board is active-low. The maps below
//! are indexed by [`SwitchId`] / [`ActuatorId`] bank order and must
//! stay in sync with the peripheral claims in `main.rs`.
//!
//! [`SwitchId`]: windrow_core::traits::SwitchId
//! [`ActuatorId`]: windrow_core::traits::ActuatorId

use windrow_core::config::{ActuatorPinMap, PinConfig, SwitchPinMap, TimingConfig};

/// Switch wiring: PushArmIn, PushArmOut, SweepArmIn, SweepArmOut,
/// UnloadPosition, BaleRowReady, LoadFull, RowSwept
pub const SWITCH_PINS: SwitchPinMap = [
    PinConfig::switch_to_ground(2),
    PinConfig::switch_to_ground(3),
    PinConfig::switch_to_ground(4),
    PinConfig::switch_to_ground(5),
    PinConfig::switch_to_ground(6),
    PinConfig::switch_to_ground(7),
    PinConfig::switch_to_ground(8),
    PinConfig::switch_to_ground(9),
];

/// Relay wiring: PushOut, PushIn, SweepOut, SweepIn, LoadChain,
/// UnloadChain
pub const ACTUATOR_PINS: ActuatorPinMap = [
    PinConfig::inverted(16),
    PinConfig::inverted(17),
    PinConfig::inverted(18),
    PinConfig::inverted(19),
    PinConfig::inverted(20),
    PinConfig::inverted(21),
];

/// Timing for this machine
///
/// The first-row dwell was tuned in the field: two seconds lets the
/// first pair ride far enough up the chain that the sweep arm catches
/// both bales squarely.
pub const TIMING: TimingConfig = TimingConfig {
    first_row_dwell_ms: 2000,
    debounce_ms: 25,
    tick_interval_ms: 10,
};
