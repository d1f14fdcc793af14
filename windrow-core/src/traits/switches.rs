//! Switch input trait
//!
//! The wagon carries eight binary limit/position switches. The switch
//! input captures a debounced snapshot of all of them once per control
//! tick; handlers only ever see readings from the same tick.

/// Number of logical switches on the machine
pub const SWITCH_COUNT: usize = 8;

/// Logical switch identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchId {
    /// Push arm at its retracted limit
    PushArmIn,
    /// Push arm at its extended limit
    PushArmOut,
    /// Sweep arm at its retracted limit
    SweepArmIn,
    /// Sweep arm at its extended (swept) limit
    SweepArmOut,
    /// Unload chain at its resting/ready position
    ///
    /// Tripped both at the start and at the end of the unload stroke;
    /// see [`crate::sequence::UnloadTracker`] for the disambiguation.
    UnloadPosition,
    /// A pair of bales is staged on the load chain
    BaleRowReady,
    /// The chamber holds a full row-set
    LoadFull,
    /// The first row of the current set has already been swept
    RowSwept,
}

impl SwitchId {
    /// All switches, in bank order
    pub const ALL: [SwitchId; SWITCH_COUNT] = [
        SwitchId::PushArmIn,
        SwitchId::PushArmOut,
        SwitchId::SweepArmIn,
        SwitchId::SweepArmOut,
        SwitchId::UnloadPosition,
        SwitchId::BaleRowReady,
        SwitchId::LoadFull,
        SwitchId::RowSwept,
    ];

    /// Index of this switch within a bank
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name for status output
    pub const fn label(self) -> &'static str {
        match self {
            SwitchId::PushArmIn => "push arm in",
            SwitchId::PushArmOut => "push arm out",
            SwitchId::SweepArmIn => "sweep arm in",
            SwitchId::SweepArmOut => "sweep arm out",
            SwitchId::UnloadPosition => "unload position",
            SwitchId::BaleRowReady => "bale row ready",
            SwitchId::LoadFull => "load full",
            SwitchId::RowSwept => "row swept",
        }
    }
}

/// Trait for the debounced switch bank
///
/// `refresh` captures the readings for the current tick; the accessor
/// methods are stable until the next `refresh`. "Active" means the
/// monitored mechanical condition is currently true, independent of
/// electrical polarity.
pub trait SwitchInput {
    /// Capture all switch readings for this tick
    fn refresh(&mut self);

    /// Check if a switch is currently active
    fn is_active(&self, id: SwitchId) -> bool;

    /// Check if a switch became active since the previous refresh
    fn became_active(&self, id: SwitchId) -> bool;

    /// Check if a switch became inactive since the previous refresh
    fn became_inactive(&self, id: SwitchId) -> bool;
}
