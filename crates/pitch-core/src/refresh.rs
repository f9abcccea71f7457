// File: crates/pitch-core/src/refresh.rs
// Summary: Polling cadence config and a deterministic refresh timer with an in-flight guard.

use std::time::Duration;

use log::debug;

/// Collaborator-supplied polling configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshConfig {
    pub enabled: bool,
    pub interval_secs: u64,
}

impl RefreshConfig {
    /// Enabled cadence; sub-second intervals are clamped up to one second.
    pub fn every(interval_secs: u64) -> Self {
        Self { enabled: true, interval_secs: interval_secs.max(1) }
    }

    pub fn disabled() -> Self {
        Self { enabled: false, interval_secs: 0 }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self::every(15)
    }
}

/// Interval driver for one chart widget. Time is injected through
/// [`RefreshTimer::advance`] so tick behavior is deterministic; wall-clock
/// scheduling belongs to the event loop hosting the widget.
///
/// While a tick is in flight the timer keeps accruing but yields nothing,
/// and intervals that fully elapse during the flight are skipped rather
/// than queued. A stopped timer never fires again.
#[derive(Clone, Debug)]
pub struct RefreshTimer {
    interval: Duration,
    enabled: bool,
    accrued: Duration,
    in_flight: bool,
}

impl RefreshTimer {
    pub fn new(config: RefreshConfig) -> Self {
        Self {
            interval: Duration::from_secs(config.interval_secs.max(1)),
            enabled: config.enabled,
            accrued: Duration::ZERO,
            in_flight: false,
        }
    }

    /// Accrue `dt` of elapsed time and return how many ticks are now due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.enabled {
            return 0;
        }
        self.accrued += dt;
        if self.in_flight {
            return 0;
        }
        let mut due = 0u32;
        while self.accrued >= self.interval {
            self.accrued -= self.interval;
            due += 1;
        }
        if due > 0 {
            debug!("refresh timer due: {due} tick(s)");
        }
        due
    }

    /// Mark a fetch as outstanding; no further ticks fire until completion.
    pub fn begin_tick(&mut self) {
        self.in_flight = true;
    }

    /// Complete the outstanding fetch. Intervals missed while in flight are
    /// dropped, keeping only the phase remainder.
    pub fn complete_tick(&mut self) {
        self.in_flight = false;
        while self.accrued >= self.interval {
            self.accrued -= self.interval;
        }
    }

    /// Disarm on unmount; no dangling tick may fire after teardown.
    pub fn stop(&mut self) {
        self.enabled = false;
        self.accrued = Duration::ZERO;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}
