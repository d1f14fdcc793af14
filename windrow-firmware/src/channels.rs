//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Channel capacity for status updates
const STATUS_CHANNEL_SIZE: usize = 8;

/// Status updates from the control task
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusUpdate {
    /// The machine entered a new phase
    Phase(&'static str),
    /// What the active phase is waiting on
    WaitingOn(&'static str),
}

/// Status updates for the log task (display rendering would tap the
/// same channel)
pub static STATUS_CHANNEL: Channel<CriticalSectionRawMutex, StatusUpdate, STATUS_CHANNEL_SIZE> =
    Channel::new();
