//! Status log task
//!
//! Drains the status channel and renders updates over defmt. An LCD or
//! serial console task would consume the same channel; the sequencer
//! neither knows nor cares.

use defmt::*;

use crate::channels::{StatusUpdate, STATUS_CHANNEL};

/// Status log task - renders status updates from the control task
#[embassy_executor::task]
pub async fn status_log_task() {
    info!("Status log task started");

    loop {
        match STATUS_CHANNEL.receive().await {
            StatusUpdate::Phase(name) => info!("phase: {}", name),
            StatusUpdate::WaitingOn(description) => debug!("waiting on: {}", description),
        }
    }
}
