//! Machine phases
//!
//! Exactly one phase is active at a time. Transitions happen only at
//! tick boundaries, when the active phase's handler reports completion;
//! the transition table lives in [`crate::sequence::Sequencer`].

/// Machine phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Drive every actuator to its rest position before cycling begins
    Home,
    /// Run the load chain until a pair of bales is staged
    Load,
    /// Sweep the first pair ninety degrees to the front of the machine
    SweepOut,
    /// Retract the sweep arm for the next pair
    SweepIn,
    /// Push the staged pair across the chamber
    PushOut,
    /// Retract the push arm for the next pair
    PushIn,
    /// Run the unload chain through a full eject cycle
    Unload,
}

impl Phase {
    /// Human-readable name for status output
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Home => "home",
            Phase::Load => "load",
            Phase::SweepOut => "sweep out",
            Phase::SweepIn => "sweep in",
            Phase::PushOut => "push out",
            Phase::PushIn => "push in",
            Phase::Unload => "unload",
        }
    }

    /// Check if this phase moves the machine (anything but homing)
    pub const fn is_cycling(self) -> bool {
        !matches!(self, Phase::Home)
    }
}

impl Default for Phase {
    /// The machine always powers up homing
    fn default() -> Self {
        Phase::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_home() {
        assert_eq!(Phase::default(), Phase::Home);
        assert!(!Phase::default().is_cycling());
    }

    #[test]
    fn test_labels_are_distinct() {
        let all = [
            Phase::Home,
            Phase::Load,
            Phase::SweepOut,
            Phase::SweepIn,
            Phase::PushOut,
            Phase::PushIn,
            Phase::Unload,
        ];
        for a in all {
            for b in all {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }
}
