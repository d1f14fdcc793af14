//! Hardware configuration types
//!
//! Pin-level configuration for the switch and relay banks. The
//! firmware crate owns the actual board definition; these types keep
//! pin polarity and pull-up wiring out of the driver logic.

use crate::traits::{ACTUATOR_COUNT, SWITCH_COUNT};

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create an inverted pin with pull-up enabled
    ///
    /// The usual wiring for a normally-open limit switch to ground.
    pub const fn switch_to_ground(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// Pin assignment for the switch bank, indexed by [`crate::traits::SwitchId`]
pub type SwitchPinMap = [PinConfig; SWITCH_COUNT];

/// Pin assignment for the relay bank, indexed by [`crate::traits::ActuatorId`]
pub type ActuatorPinMap = [PinConfig; ACTUATOR_COUNT];
