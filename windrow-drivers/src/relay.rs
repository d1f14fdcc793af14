//! Relay outputs
//!
//! The wagon's solenoid valves and chain clutches are driven by relay
//! boards, commonly active-low. A relay starts disengaged and is
//! commanded idempotently; re-commanding the held state touches
//! nothing.

use windrow_core::traits::{ActuatorId, ActuatorOutput, ACTUATOR_COUNT};

/// A single relay output
///
/// `inverted` selects active-low boards: engaged then drives the pin
/// low.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Relay<P> {
    pin: P,
    inverted: bool,
    engaged: bool,
}

impl<P: super::gpio::OutputPin> Relay<P> {
    /// Create a relay, driving it to the disengaged level immediately
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut relay = Self {
            pin,
            inverted,
            engaged: true, // Forces the initial write through
        };
        relay.set_engaged(false);
        relay
    }

    /// Create a relay on an active-low board
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Command the relay state; no-op if already there
    pub fn set_engaged(&mut self, engaged: bool) {
        if self.engaged == engaged {
            return;
        }
        self.engaged = engaged;

        if engaged != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    /// Current commanded state
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

/// The wagon's six-relay output bank
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayBank<P> {
    relays: [Relay<P>; ACTUATOR_COUNT],
}

impl<P: super::gpio::OutputPin> RelayBank<P> {
    /// Create a bank from relays in [`ActuatorId`] order
    pub fn new(relays: [Relay<P>; ACTUATOR_COUNT]) -> Self {
        Self { relays }
    }

    /// Current commanded state of one relay
    pub fn is_engaged(&self, id: ActuatorId) -> bool {
        self.relays[id.index()].is_engaged()
    }

    /// Disengage every relay
    pub fn all_off(&mut self) {
        for relay in &mut self.relays {
            relay.set_engaged(false);
        }
    }
}

impl<P: super::gpio::OutputPin> ActuatorOutput for RelayBank<P> {
    fn engage(&mut self, id: ActuatorId) {
        self.relays[id.index()].set_engaged(true);
    }

    fn disengage(&mut self, id: ActuatorId) {
        self.relays[id.index()].set_engaged(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::OutputPin;
    use core::cell::Cell;

    /// Pin backed by a shared cell, with a write counter to verify
    /// idempotence
    struct CountingPin<'a> {
        level: &'a Cell<bool>,
        writes: &'a Cell<u32>,
    }

    impl OutputPin for CountingPin<'_> {
        fn set_high(&mut self) {
            self.level.set(true);
            self.writes.set(self.writes.get() + 1);
        }

        fn set_low(&mut self) {
            self.level.set(false);
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[test]
    fn test_active_high_relay() {
        let level = Cell::new(false);
        let writes = Cell::new(0);
        let mut relay = Relay::new(
            CountingPin {
                level: &level,
                writes: &writes,
            },
            false,
        );

        assert!(!relay.is_engaged());
        assert!(!level.get());

        relay.set_engaged(true);
        assert!(relay.is_engaged());
        assert!(level.get());

        relay.set_engaged(false);
        assert!(!level.get());
    }

    #[test]
    fn test_active_low_relay_rests_high() {
        let level = Cell::new(false);
        let writes = Cell::new(0);
        let mut relay = Relay::new_active_low(CountingPin {
            level: &level,
            writes: &writes,
        });

        // Disengaged drives the pin high on an active-low board
        assert!(!relay.is_engaged());
        assert!(level.get());

        relay.set_engaged(true);
        assert!(!level.get());
    }

    #[test]
    fn test_commands_are_idempotent() {
        let level = Cell::new(false);
        let writes = Cell::new(0);
        let mut relay = Relay::new(
            CountingPin {
                level: &level,
                writes: &writes,
            },
            false,
        );

        let after_init = writes.get();
        relay.set_engaged(false);
        relay.set_engaged(false);
        assert_eq!(writes.get(), after_init);

        relay.set_engaged(true);
        relay.set_engaged(true);
        relay.set_engaged(true);
        assert_eq!(writes.get(), after_init + 1);
    }

    #[cfg(feature = "defmt")]
    impl defmt::Format for CountingPin<'_> {
        fn format(&self, f: defmt::Formatter) {
            defmt::write!(f, "CountingPin({})", self.level.get());
        }
    }

    #[cfg(feature = "defmt")]
    #[test]
    fn test_relay_types_are_defmt_formattable() {
        fn assert_format<T: defmt::Format>() {}
        assert_format::<Relay<CountingPin<'static>>>();
        assert_format::<RelayBank<CountingPin<'static>>>();
    }

    #[test]
    fn test_bank_addresses_by_id() {
        let levels: [Cell<bool>; ACTUATOR_COUNT] = Default::default();
        let writes = Cell::new(0);

        let relays = [
            Relay::new(CountingPin { level: &levels[0], writes: &writes }, false),
            Relay::new(CountingPin { level: &levels[1], writes: &writes }, false),
            Relay::new(CountingPin { level: &levels[2], writes: &writes }, false),
            Relay::new(CountingPin { level: &levels[3], writes: &writes }, false),
            Relay::new(CountingPin { level: &levels[4], writes: &writes }, false),
            Relay::new(CountingPin { level: &levels[5], writes: &writes }, false),
        ];
        let mut bank = RelayBank::new(relays);

        bank.engage(ActuatorId::LoadChain);
        assert!(bank.is_engaged(ActuatorId::LoadChain));
        assert!(levels[ActuatorId::LoadChain.index()].get());
        for id in ActuatorId::ALL {
            if id != ActuatorId::LoadChain {
                assert!(!bank.is_engaged(id));
            }
        }

        bank.all_off();
        for id in ActuatorId::ALL {
            assert!(!bank.is_engaged(id));
        }
    }
}
