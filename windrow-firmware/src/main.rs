//! Windrow - Bale Accumulator Wagon Control Firmware
//!
//! Main firmware binary for the RP2040-based wagon controller. The
//! machine loads pairs of bales, sweeps the first pair ninety degrees,
//! pushes pairs across the chamber, and runs the unload chain once a
//! full row-set has been accumulated.
//!
//! All sequencing lives in windrow-core; this binary owns pin
//! assignment, bank construction, and task spawning.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use windrow_core::config::PinConfig;
use windrow_drivers::relay::{Relay, RelayBank};
use windrow_drivers::switch::{DebouncedSwitch, SwitchBank};

use crate::io::{BoardInput, BoardOutput, UptimeClock};

mod board;
mod channels;
mod io;
mod status;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Windrow firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Claim the switch pins in SwitchId bank order; the GPIO numbers
    // must match board::SWITCH_PINS
    let switch_pins: [AnyPin; 8] = [
        AnyPin::from(p.PIN_2), // push arm in
        AnyPin::from(p.PIN_3), // push arm out
        AnyPin::from(p.PIN_4), // sweep arm in
        AnyPin::from(p.PIN_5), // sweep arm out
        AnyPin::from(p.PIN_6), // unload position
        AnyPin::from(p.PIN_7), // bale row ready
        AnyPin::from(p.PIN_8), // load full
        AnyPin::from(p.PIN_9), // row swept
    ];

    let mut index = 0;
    let switches = switch_pins.map(|pin| {
        let cfg = board::SWITCH_PINS[index];
        index += 1;
        make_switch(pin, cfg)
    });
    let switch_bank = SwitchBank::new(switches, UptimeClock);
    info!("Switch bank initialized");

    // Relay pins in ActuatorId bank order, matching board::ACTUATOR_PINS
    let relay_pins: [AnyPin; 6] = [
        AnyPin::from(p.PIN_16), // push out
        AnyPin::from(p.PIN_17), // push in
        AnyPin::from(p.PIN_18), // sweep out
        AnyPin::from(p.PIN_19), // sweep in
        AnyPin::from(p.PIN_20), // load chain
        AnyPin::from(p.PIN_21), // unload chain
    ];

    let mut index = 0;
    let relays = relay_pins.map(|pin| {
        let cfg = board::ACTUATOR_PINS[index];
        index += 1;
        make_relay(pin, cfg)
    });
    let relay_bank = RelayBank::new(relays);
    info!("Relay bank initialized, all outputs at rest");

    // Spawn tasks
    spawner.spawn(tasks::status_log_task()).unwrap();
    spawner
        .spawn(tasks::control_task(switch_bank, relay_bank, board::TIMING))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - the machine lives in the
    // control task until powered off
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Build one debounced switch from its pin config
fn make_switch(pin: AnyPin, cfg: PinConfig) -> DebouncedSwitch<BoardInput> {
    let pull = if cfg.pull_up { Pull::Up } else { Pull::None };
    DebouncedSwitch::new(
        BoardInput(Input::new(pin, pull)),
        cfg.inverted,
        board::TIMING.debounce_ms,
    )
}

/// Build one relay from its pin config
fn make_relay(pin: AnyPin, cfg: PinConfig) -> Relay<BoardOutput> {
    // Rest level keeps the relay released from the first microsecond
    let rest = if cfg.inverted { Level::High } else { Level::Low };
    Relay::new(BoardOutput(Output::new(pin, rest)), cfg.inverted)
}
