//! The accumulation sequencer
//!
//! One control tick runs the active phase's handler exactly once.
//! Handlers command actuators idempotently and report completion; the
//! sequencer applies the transition table to pick the next phase.

pub mod handlers;
pub mod sequencer;
pub mod unload;

pub use sequencer::{Context, Sequencer};
pub use unload::{UnloadCycle, UnloadTracker};

#[cfg(test)]
pub(crate) mod testutil {
    //! Shared fakes for handler and sequencer tests

    use heapless::Vec;

    use crate::traits::{
        ActuatorId, ActuatorOutput, DwellTimer, SwitchId, SwitchInput, ACTUATOR_COUNT,
        SWITCH_COUNT,
    };

    /// Scriptable switch bank
    ///
    /// `set` stages a raw level; `refresh` commits it and computes the
    /// edge flags for the tick, like a real debounced bank.
    #[derive(Debug, Default)]
    pub struct FakeSwitches {
        pending: [bool; SWITCH_COUNT],
        current: [bool; SWITCH_COUNT],
        previous: [bool; SWITCH_COUNT],
    }

    impl FakeSwitches {
        pub fn new() -> Self {
            Self::default()
        }

        /// Stage a level for the next refresh
        pub fn set(&mut self, id: SwitchId, active: bool) {
            self.pending[id.index()] = active;
        }

        /// Stage several active switches at once (everything else stays)
        pub fn set_all(&mut self, active: &[SwitchId]) {
            self.pending = [false; SWITCH_COUNT];
            for id in active {
                self.pending[id.index()] = true;
            }
        }
    }

    impl SwitchInput for FakeSwitches {
        fn refresh(&mut self) {
            self.previous = self.current;
            self.current = self.pending;
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

    /// Recording actuator bank
    #[derive(Debug, Default)]
    pub struct FakeActuators {
        engaged: [bool; ACTUATOR_COUNT],
    }

    impl FakeActuators {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn is_engaged(&self, id: ActuatorId) -> bool {
            self.engaged[id.index()]
        }

        /// Ids of every engaged actuator
        pub fn engaged_ids(&self) -> Vec<ActuatorId, ACTUATOR_COUNT> {
            let mut ids = Vec::new();
            for id in ActuatorId::ALL {
                if self.is_engaged(id) {
                    let _ = ids.push(id);
                }
            }
            ids
        }
    }

    impl ActuatorOutput for FakeActuators {
        fn engage(&mut self, id: ActuatorId) {
            self.engaged[id.index()] = true;
        }

        fn disengage(&mut self, id: ActuatorId) {
            self.engaged[id.index()] = false;
        }
    }

    /// Dwell timer that records requested durations instead of blocking
    #[derive(Debug, Default)]
    pub struct FakeDwell {
        pub dwells_ms: Vec<u32, 8>,
    }

    impl FakeDwell {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl DwellTimer for FakeDwell {
        fn dwell_ms(&mut self, ms: u32) {
            let _ = self.dwells_ms.push(ms);
        }
    }
}
