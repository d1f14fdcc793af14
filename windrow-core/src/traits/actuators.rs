//! Actuator output trait
//!
//! Six binary actuators (solenoid relays / clutches) drive the wagon's
//! hydraulics and chains. Outputs are commanded idempotently every tick
//! with no feedback read path.

/// Number of logical actuators on the machine
pub const ACTUATOR_COUNT: usize = 6;

/// Logical actuator identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorId {
    /// Extend the push arm
    PushOut,
    /// Retract the push arm
    PushIn,
    /// Extend the sweep arm
    SweepOut,
    /// Retract the sweep arm
    SweepIn,
    /// Run the load chain
    LoadChain,
    /// Run the unload chain
    UnloadChain,
}

impl ActuatorId {
    /// All actuators, in bank order
    pub const ALL: [ActuatorId; ACTUATOR_COUNT] = [
        ActuatorId::PushOut,
        ActuatorId::PushIn,
        ActuatorId::SweepOut,
        ActuatorId::SweepIn,
        ActuatorId::LoadChain,
        ActuatorId::UnloadChain,
    ];

    /// Index of this actuator within a bank
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name for status output
    pub const fn label(self) -> &'static str {
        match self {
            ActuatorId::PushOut => "push out",
            ActuatorId::PushIn => "push in",
            ActuatorId::SweepOut => "sweep out",
            ActuatorId::SweepIn => "sweep in",
            ActuatorId::LoadChain => "load chain",
            ActuatorId::UnloadChain => "unload chain",
        }
    }
}

/// Trait for the actuator bank
///
/// Both operations are idempotent: commanding an actuator into the
/// state it already holds produces no observable change.
pub trait ActuatorOutput {
    /// Engage an actuator
    fn engage(&mut self, id: ActuatorId);

    /// Disengage an actuator
    fn disengage(&mut self, id: ActuatorId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actuator_indices_match_bank_order() {
        for (i, id) in ActuatorId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }
}
