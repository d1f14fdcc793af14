//! Control loop task
//!
//! Runs the sequencer at a fixed tick rate. Each tick refreshes the
//! switch bank, then hands the machine to the sequencer; there is no
//! other writer of actuator state. The loop never exits.

use defmt::*;
use embassy_time::{Duration, Ticker};

use windrow_core::config::TimingConfig;
use windrow_core::sequence::{Context, Sequencer};
use windrow_core::traits::SwitchInput;
use windrow_drivers::relay::RelayBank;
use windrow_drivers::switch::SwitchBank;

use crate::io::{BlockingDwell, BoardInput, BoardOutput, UptimeClock};
use crate::status::ChannelStatus;

/// Control task - the machine's single control thread
#[embassy_executor::task]
pub async fn control_task(
    switches: SwitchBank<BoardInput, UptimeClock>,
    relays: RelayBank<BoardOutput>,
    timing: TimingConfig,
) {
    info!("Control task started, tick interval {}ms", timing.tick_interval_ms);

    let mut sequencer = Sequencer::new(timing);
    let mut ctx = Context::new(switches, relays, ChannelStatus, BlockingDwell);

    let mut ticker = Ticker::every(Duration::from_millis(timing.tick_interval_ms as u64));

    loop {
        ticker.next().await;

        // All readings for the tick are captured here; the handlers
        // never see a mix of readings from different ticks.
        ctx.switches.refresh();
        sequencer.tick(&mut ctx);
    }
}
