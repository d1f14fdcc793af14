//! Hardware abstraction traits
//!
//! These traits define the interface between the sequencing logic
//! and hardware-specific implementations.

pub mod actuators;
pub mod status;
pub mod switches;
pub mod time;

pub use actuators::{ActuatorId, ActuatorOutput, ACTUATOR_COUNT};
pub use status::{NullStatus, StatusReporter, StatusSink};
pub use switches::{SwitchId, SwitchInput, SWITCH_COUNT};
pub use time::{Clock, DwellTimer};
