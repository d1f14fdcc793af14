//! Status sink trait
//!
//! The sequencer emits human-readable state strings for whatever
//! display the wagon carries (serial console, LCD). The sink is
//! optional; [`NullStatus`] is a valid implementation. Rendering is
//! entirely the sink's concern.

/// Trait for status reporting
pub trait StatusSink {
    /// Report the name of the phase now executing
    fn report_phase(&mut self, name: &'static str);

    /// Report what the current phase is waiting on
    fn report_waiting_on(&mut self, description: &'static str);
}

/// No-op status sink
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn report_phase(&mut self, _name: &'static str) {}
    fn report_waiting_on(&mut self, _description: &'static str) {}
}

/// Deduplicating wrapper around a status sink
///
/// The sink contract is "called only on value change"; this wrapper
/// enforces it so handlers can report unconditionally every tick.
#[derive(Debug)]
pub struct StatusReporter<T> {
    sink: T,
    last_phase: Option<&'static str>,
    last_waiting: Option<&'static str>,
}

impl<T: StatusSink> StatusReporter<T> {
    /// Wrap a sink
    pub fn new(sink: T) -> Self {
        Self {
            sink,
            last_phase: None,
            last_waiting: None,
        }
    }

    /// Report a phase name, forwarding only on change
    ///
    /// A phase change also clears the waiting-on description so the
    /// new phase's first report always goes through.
    pub fn phase(&mut self, name: &'static str) {
        if self.last_phase != Some(name) {
            self.last_phase = Some(name);
            self.last_waiting = None;
            self.sink.report_phase(name);
        }
    }

    /// Report a waiting-on description, forwarding only on change
    pub fn waiting_on(&mut self, description: &'static str) {
        if self.last_waiting != Some(description) {
            self.last_waiting = Some(description);
            self.sink.report_waiting_on(description);
        }
    }

    /// Access the wrapped sink
    pub fn sink(&self) -> &T {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        phases: usize,
        waits: usize,
    }

    impl StatusSink for CountingSink {
        fn report_phase(&mut self, _name: &'static str) {
            self.phases += 1;
        }
        fn report_waiting_on(&mut self, _description: &'static str) {
            self.waits += 1;
        }
    }

    #[test]
    fn test_phase_reported_once_per_change() {
        let mut reporter = StatusReporter::new(CountingSink::default());
        reporter.phase("load");
        reporter.phase("load");
        reporter.phase("load");
        assert_eq!(reporter.sink().phases, 1);

        reporter.phase("sweep out");
        assert_eq!(reporter.sink().phases, 2);
    }

    #[test]
    fn test_waiting_deduplicated() {
        let mut reporter = StatusReporter::new(CountingSink::default());
        reporter.waiting_on("bale row ready");
        reporter.waiting_on("bale row ready");
        assert_eq!(reporter.sink().waits, 1);
    }

    #[test]
    fn test_phase_change_resets_waiting() {
        let mut reporter = StatusReporter::new(CountingSink::default());
        reporter.phase("load");
        reporter.waiting_on("bale row ready");
        reporter.phase("sweep out");
        // Same description again, but in a new phase
        reporter.waiting_on("bale row ready");
        assert_eq!(reporter.sink().waits, 2);
    }

    #[test]
    fn test_null_status_accepts_everything() {
        let mut sink = NullStatus;
        sink.report_phase("home");
        sink.report_waiting_on("push arm in");
    }
}
