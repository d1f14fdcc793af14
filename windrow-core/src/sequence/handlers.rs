//! Per-phase handlers
//!
//! One function per machine phase. Each runs once per control tick,
//! disengages the actuators irrelevant to its phase first, then drives
//! its own actuator(s) and returns completion. The disengage-first
//! rule guarantees no actuator stays engaged when control passes to
//! another phase, however abrupt the change.
//!
//! Handlers only test the switches relevant to their own phase and
//! never validate global consistency; a contradictory switch
//! combination is silently tolerated. If an awaited switch never
//! activates the handler retries forever and the machine stalls in
//! place, which is the intended fail-safe.

use crate::config::TimingConfig;
use crate::traits::{
    ActuatorId, ActuatorOutput, DwellTimer, StatusReporter, StatusSink, SwitchId, SwitchInput,
};

use super::unload::UnloadTracker;

/// Home: drive every actuator to its rest position
///
/// Retraction runs one actuator at a time in fixed priority order
/// (push, then sweep, then unload chain); the first limit switch found
/// inactive claims the tick.
pub fn home<S, A, T>(switches: &S, actuators: &mut A, status: &mut StatusReporter<T>) -> bool
where
    S: SwitchInput,
    A: ActuatorOutput,
    T: StatusSink,
{
    actuators.disengage(ActuatorId::LoadChain);
    actuators.disengage(ActuatorId::PushOut);
    actuators.disengage(ActuatorId::SweepOut);

    if !switches.is_active(SwitchId::PushArmIn) {
        actuators.engage(ActuatorId::PushIn);
        status.waiting_on(SwitchId::PushArmIn.label());
        return false;
    }
    actuators.disengage(ActuatorId::PushIn);

    if !switches.is_active(SwitchId::SweepArmIn) {
        actuators.engage(ActuatorId::SweepIn);
        status.waiting_on(SwitchId::SweepArmIn.label());
        return false;
    }
    actuators.disengage(ActuatorId::SweepIn);

    if !switches.is_active(SwitchId::UnloadPosition) {
        actuators.engage(ActuatorId::UnloadChain);
        status.waiting_on(SwitchId::UnloadPosition.label());
        return false;
    }
    actuators.disengage(ActuatorId::UnloadChain);

    true
}

/// Load: run the load chain until a pair of bales is staged
///
/// For the first row of a set (row-swept switch inactive) the handler
/// holds for the configured dwell before disengaging, letting the row
/// travel further before the sweep arm engages it. The dwell is a
/// blocking wait; switches are not re-sampled during it.
pub fn load<S, A, T, D>(
    switches: &S,
    actuators: &mut A,
    status: &mut StatusReporter<T>,
    dwell: &mut D,
    timing: &TimingConfig,
) -> bool
where
    S: SwitchInput,
    A: ActuatorOutput,
    T: StatusSink,
    D: DwellTimer,
{
    actuators.disengage(ActuatorId::UnloadChain);
    actuators.disengage(ActuatorId::PushIn);
    actuators.disengage(ActuatorId::PushOut);
    actuators.disengage(ActuatorId::SweepIn);
    actuators.disengage(ActuatorId::SweepOut);

    if !switches.is_active(SwitchId::BaleRowReady) {
        actuators.engage(ActuatorId::LoadChain);
        status.waiting_on(SwitchId::BaleRowReady.label());
        return false;
    }

    if !switches.is_active(SwitchId::RowSwept) {
        dwell.dwell_ms(timing.first_row_dwell_ms);
    }
    actuators.disengage(ActuatorId::LoadChain);
    true
}

/// Sweep out: swing the staged pair to the front of the machine
pub fn sweep_out<S, A, T>(switches: &S, actuators: &mut A, status: &mut StatusReporter<T>) -> bool
where
    S: SwitchInput,
    A: ActuatorOutput,
    T: StatusSink,
{
    actuators.disengage(ActuatorId::LoadChain);
    actuators.disengage(ActuatorId::UnloadChain);
    actuators.disengage(ActuatorId::PushIn);
    actuators.disengage(ActuatorId::PushOut);
    actuators.disengage(ActuatorId::SweepIn);

    if !switches.is_active(SwitchId::SweepArmOut) {
        actuators.engage(ActuatorId::SweepOut);
        status.waiting_on(SwitchId::SweepArmOut.label());
        return false;
    }
    actuators.disengage(ActuatorId::SweepOut);
    true
}

/// Sweep in: retract the sweep arm for the next pair
pub fn sweep_in<S, A, T>(switches: &S, actuators: &mut A, status: &mut StatusReporter<T>) -> bool
where
    S: SwitchInput,
    A: ActuatorOutput,
    T: StatusSink,
{
    actuators.disengage(ActuatorId::LoadChain);
    actuators.disengage(ActuatorId::UnloadChain);
    actuators.disengage(ActuatorId::PushIn);
    actuators.disengage(ActuatorId::PushOut);
    actuators.disengage(ActuatorId::SweepOut);

    if !switches.is_active(SwitchId::SweepArmIn) {
        actuators.engage(ActuatorId::SweepIn);
        status.waiting_on(SwitchId::SweepArmIn.label());
        return false;
    }
    actuators.disengage(ActuatorId::SweepIn);
    true
}

/// Push out: push the staged pair across the chamber
///
/// Early abort: if the load already reads full, stop pushing rather
/// than over-stroke against a packed chamber.
pub fn push_out<S, A, T>(switches: &S, actuators: &mut A, status: &mut StatusReporter<T>) -> bool
where
    S: SwitchInput,
    A: ActuatorOutput,
    T: StatusSink,
{
    actuators.disengage(ActuatorId::LoadChain);
    actuators.disengage(ActuatorId::UnloadChain);
    actuators.disengage(ActuatorId::PushIn);
    actuators.disengage(ActuatorId::SweepIn);
    actuators.disengage(ActuatorId::SweepOut);

    if !switches.is_active(SwitchId::PushArmOut) && !switches.is_active(SwitchId::LoadFull) {
        actuators.engage(ActuatorId::PushOut);
        status.waiting_on(SwitchId::PushArmOut.label());
        return false;
    }
    actuators.disengage(ActuatorId::PushOut);
    true
}

/// Push in: retract the push arm for the next pair
pub fn push_in<S, A, T>(switches: &S, actuators: &mut A, status: &mut StatusReporter<T>) -> bool
where
    S: SwitchInput,
    A: ActuatorOutput,
    T: StatusSink,
{
    actuators.disengage(ActuatorId::LoadChain);
    actuators.disengage(ActuatorId::UnloadChain);
    actuators.disengage(ActuatorId::PushOut);
    actuators.disengage(ActuatorId::SweepIn);
    actuators.disengage(ActuatorId::SweepOut);

    if !switches.is_active(SwitchId::PushArmIn) {
        actuators.engage(ActuatorId::PushIn);
        status.waiting_on(SwitchId::PushArmIn.label());
        return false;
    }
    actuators.disengage(ActuatorId::PushIn);
    true
}

/// Unload: run the unload chain through a full eject stroke
///
/// The chain stays engaged for the handler's entire not-complete
/// duration; the tracker decides when the position switch's second
/// closing edge counts as the end of the stroke.
pub fn unload<S, A, T>(
    switches: &S,
    actuators: &mut A,
    status: &mut StatusReporter<T>,
    tracker: &mut UnloadTracker,
) -> bool
where
    S: SwitchInput,
    A: ActuatorOutput,
    T: StatusSink,
{
    actuators.disengage(ActuatorId::LoadChain);
    actuators.disengage(ActuatorId::PushIn);
    actuators.disengage(ActuatorId::PushOut);
    actuators.disengage(ActuatorId::SweepIn);
    actuators.disengage(ActuatorId::SweepOut);

    actuators.engage(ActuatorId::UnloadChain);

    if tracker.update(switches.is_active(SwitchId::UnloadPosition)) {
        actuators.disengage(ActuatorId::UnloadChain);
        return true;
    }
    status.waiting_on("unload cycle");
    false
}
