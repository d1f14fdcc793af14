//! Timing configuration

/// Control loop and dwell timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Extra dwell before sweeping the first row of a set (ms)
    ///
    /// Applied only when the row-swept switch is inactive at load
    /// completion, to let the row travel further along the chain
    /// before the sweep arm engages it.
    pub first_row_dwell_ms: u32,
    /// Required stable interval before a switch reading changes (ms)
    pub debounce_ms: u32,
    /// Control loop tick interval (ms)
    pub tick_interval_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            first_row_dwell_ms: 2000,
            debounce_ms: 25,
            tick_interval_ms: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let timing = TimingConfig::default();
        assert!(timing.tick_interval_ms > 0);
        assert!(timing.debounce_ms >= timing.tick_interval_ms);
        assert!(timing.first_row_dwell_ms > timing.debounce_ms);
    }
}
