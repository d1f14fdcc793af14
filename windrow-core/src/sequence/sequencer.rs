//! Phase sequencer
//!
//! Holds the active phase, runs its handler once per tick, and applies
//! the transition table when the handler reports completion.

use crate::config::TimingConfig;
use crate::state::Phase;
use crate::traits::{
    ActuatorOutput, DwellTimer, StatusReporter, StatusSink, SwitchId, SwitchInput,
};

use super::handlers;
use super::unload::UnloadTracker;

/// Everything the sequencer touches on behalf of a tick
///
/// An explicit context instead of module-level singletons: the
/// firmware passes its real banks, tests pass fakes.
pub struct Context<S, A, T, D> {
    /// Debounced switch bank, refreshed by the control loop before
    /// each tick
    pub switches: S,
    /// Relay bank
    pub actuators: A,
    /// Deduplicated status output
    pub status: StatusReporter<T>,
    /// Blocking dwell timer
    pub dwell: D,
}

impl<S, A, T, D> Context<S, A, T, D>
where
    S: SwitchInput,
    A: ActuatorOutput,
    T: StatusSink,
    D: DwellTimer,
{
    /// Bundle the machine's I/O for the sequencer
    pub fn new(switches: S, actuators: A, status: T, dwell: D) -> Self {
        Self {
            switches,
            actuators,
            status: StatusReporter::new(status),
            dwell,
        }
    }
}

/// The accumulation sequencer
///
/// Powers up in [`Phase::Home`] and cycles Load / Sweep / Push until
/// the chamber is full, then unloads and starts over. It never exits;
/// a phase whose completion switch never trips simply holds the
/// machine there.
#[derive(Debug)]
pub struct Sequencer {
    phase: Phase,
    unload: UnloadTracker,
    timing: TimingConfig,
}

impl Sequencer {
    /// Create a sequencer with the given timing configuration
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            phase: Phase::Home,
            unload: UnloadTracker::new(),
            timing,
        }
    }

    /// The currently active phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run one control tick
    ///
    /// The caller refreshes the switch bank first; this method never
    /// reads hardware directly, only through the context.
    pub fn tick<S, A, T, D>(&mut self, ctx: &mut Context<S, A, T, D>)
    where
        S: SwitchInput,
        A: ActuatorOutput,
        T: StatusSink,
        D: DwellTimer,
    {
        ctx.status.phase(self.phase.label());

        let complete = match self.phase {
            Phase::Home => handlers::home(&ctx.switches, &mut ctx.actuators, &mut ctx.status),
            Phase::Load => handlers::load(
                &ctx.switches,
                &mut ctx.actuators,
                &mut ctx.status,
                &mut ctx.dwell,
                &self.timing,
            ),
            Phase::SweepOut => {
                handlers::sweep_out(&ctx.switches, &mut ctx.actuators, &mut ctx.status)
            }
            Phase::SweepIn => {
                handlers::sweep_in(&ctx.switches, &mut ctx.actuators, &mut ctx.status)
            }
            Phase::PushOut => {
                handlers::push_out(&ctx.switches, &mut ctx.actuators, &mut ctx.status)
            }
            Phase::PushIn => handlers::push_in(&ctx.switches, &mut ctx.actuators, &mut ctx.status),
            Phase::Unload => handlers::unload(
                &ctx.switches,
                &mut ctx.actuators,
                &mut ctx.status,
                &mut self.unload,
            ),
        };

        if complete {
            self.enter(self.next_phase(&ctx.switches));
        }
    }

    /// Transition table, evaluated only when the active handler has
    /// reported completion
    fn next_phase<S: SwitchInput>(&self, switches: &S) -> Phase {
        match self.phase {
            Phase::Home => Phase::Load,
            Phase::Load => {
                if switches.is_active(SwitchId::RowSwept) {
                    Phase::PushOut
                } else {
                    Phase::SweepOut
                }
            }
            Phase::SweepOut => Phase::SweepIn,
            Phase::SweepIn => Phase::Load,
            Phase::PushOut => Phase::PushIn,
            Phase::PushIn => {
                if switches.is_active(SwitchId::LoadFull) {
                    Phase::Unload
                } else {
                    Phase::Load
                }
            }
            Phase::Unload => Phase::Load,
        }
    }

    /// Make a phase active
    ///
    /// Entering Unload re-arms the cycle tracker; no other phase entry
    /// resets any state.
    fn enter(&mut self, next: Phase) {
        if next == Phase::Unload {
            self.unload.reset();
        }
        self.phase = next;
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(TimingConfig::default())
    }
}
