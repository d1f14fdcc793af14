//! Status sink implementation
//!
//! Publishes state/action strings to the status channel. The core only
//! calls on value change, so the channel traffic is light; if the
//! channel is somehow full the update is dropped rather than stalling
//! the control loop.

use windrow_core::traits::StatusSink;

use crate::channels::{StatusUpdate, STATUS_CHANNEL};

/// Status sink backed by the inter-task status channel
#[derive(Debug, Default, Clone, Copy)]
pub struct ChannelStatus;

impl StatusSink for ChannelStatus {
    fn report_phase(&mut self, name: &'static str) {
        let _ = STATUS_CHANNEL.try_send(StatusUpdate::Phase(name));
    }

    fn report_waiting_on(&mut self, description: &'static str) {
        let _ = STATUS_CHANNEL.try_send(StatusUpdate::WaitingOn(description));
    }
}
