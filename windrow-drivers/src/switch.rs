//! Debounced switch inputs
//!
//! Mechanical limit switches bounce for a few milliseconds on every
//! transition. A switch's logical state only changes after the raw
//! level has held steady for the configured debounce interval; the
//! bank then snapshots all eight logical states once per control tick
//! so the sequencer never sees a mid-tick change.

use windrow_core::traits::{Clock, SwitchId, SwitchInput, SWITCH_COUNT};

/// Default debounce interval (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 25;

/// A single debounced switch
///
/// `inverted` handles active-low wiring (normally-open switch to
/// ground with a pull-up): a low pin level then reads as "active".
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebouncedSwitch<P> {
    pin: P,
    inverted: bool,
    debounce_ms: u32,
    /// Raw (pre-debounce) logical level at the last sample
    last_raw: bool,
    /// Time of the last raw level change
    last_change_ms: u32,
    /// Debounced logical state
    stable: bool,
}

impl<P: super::gpio::InputPin> DebouncedSwitch<P> {
    /// Create a debounced switch
    ///
    /// The initial state is taken from the pin directly; a switch held
    /// closed at power-up reads active from the first sample.
    pub fn new(pin: P, inverted: bool, debounce_ms: u32) -> Self {
        let raw = pin.is_high() != inverted;
        Self {
            pin,
            inverted,
            debounce_ms,
            last_raw: raw,
            last_change_ms: 0,
            stable: raw,
        }
    }

    /// Sample the pin and update the debounced state
    pub fn sample(&mut self, now_ms: u32) {
        let raw = self.pin.is_high() != self.inverted;

        if raw != self.last_raw {
            self.last_raw = raw;
            self.last_change_ms = now_ms;
        } else if now_ms.wrapping_sub(self.last_change_ms) >= self.debounce_ms {
            self.stable = raw;
        }
    }

    /// Debounced logical state
    pub fn is_active(&self) -> bool {
        self.stable
    }
}

/// The wagon's eight-switch input bank
///
/// Implements [`SwitchInput`]: `refresh` samples and debounces every
/// switch, and latches the per-tick edge flags by comparing against the
/// previous refresh.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchBank<P, C> {
    switches: [DebouncedSwitch<P>; SWITCH_COUNT],
    clock: C,
    current: [bool; SWITCH_COUNT],
    previous: [bool; SWITCH_COUNT],
}

impl<P: super::gpio::InputPin, C: Clock> SwitchBank<P, C> {
    /// Create a bank from switches in [`SwitchId`] order
    pub fn new(switches: [DebouncedSwitch<P>; SWITCH_COUNT], clock: C) -> Self {
        let mut current = [false; SWITCH_COUNT];
        for (state, switch) in current.iter_mut().zip(switches.iter()) {
            *state = switch.is_active();
        }
        Self {
            switches,
            clock,
            current,
            previous: current,
        }
    }
}

impl<P: super::gpio::InputPin, C: Clock> SwitchInput for SwitchBank<P, C> {
    fn refresh(&mut self) {
        let now_ms = self.clock.now_ms();
        self.previous = self.current;
        for (state, switch) in self.current.iter_mut().zip(self.switches.iter_mut()) {
            switch.sample(now_ms);
            *state = switch.is_active();
        }
    }

    fn is_active(&self, id: SwitchId) -> bool {
        self.current[id.index()]
    }

    fn became_active(&self, id: SwitchId) -> bool {
        self.current[id.index()] && !self.previous[id.index()]
    }

    fn became_inactive(&self, id: SwitchId) -> bool {
        !self.current[id.index()] && self.previous[id.index()]
    }
}
