//! Time source traits

/// Monotonic millisecond clock
///
/// Wraps at `u32::MAX`; consumers must use wrapping arithmetic when
/// comparing timestamps.
pub trait Clock {
    /// Current time in milliseconds since an arbitrary epoch
    fn now_ms(&self) -> u32;
}

/// Blocking in-tick delay
///
/// The control loop is single-threaded with no competing demands, so a
/// dwell is an accepted bounded stall: no switches are read and no
/// actuators change while it runs, and it always runs to completion.
pub trait DwellTimer {
    /// Block the control thread for the given duration
    fn dwell_ms(&mut self, ms: u32);
}
