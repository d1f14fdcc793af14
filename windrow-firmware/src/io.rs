//! RP2040 adapters for the driver pin and time traits

use embassy_rp::gpio::{Input, Output};
use embassy_time::{block_for, Duration, Instant};

use windrow_core::traits::{Clock, DwellTimer};
use windrow_drivers::gpio::{InputPin, OutputPin};

/// RP2040 GPIO input
pub struct BoardInput(pub Input<'static>);

impl InputPin for BoardInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// RP2040 GPIO output
pub struct BoardOutput(pub Output<'static>);

impl OutputPin for BoardOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Millisecond clock on embassy uptime
///
/// Wraps after ~49 days of continuous operation; the debounce
/// arithmetic is wrapping, so a wrap mid-season is harmless.
#[derive(Debug, Default, Clone, Copy)]
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// Blocking dwell on the control thread
///
/// The dwell stalls the whole control loop on purpose: the machine has
/// no competing demands during a dwell, and no switches may be
/// re-sampled until it ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockingDwell;

impl DwellTimer for BlockingDwell {
    fn dwell_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
