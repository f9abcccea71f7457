// File: crates/pitch-core/src/widget.rs
// Summary: Chart widget lifecycle: buffer + timer ownership, fetch state machine, retry.

use std::time::Duration;

use log::{debug, warn};

use crate::buffer::SeriesBuffer;
use crate::error::{ChartError, FetchError};
use crate::normalize::normalize;
use crate::refresh::{RefreshConfig, RefreshTimer};
use crate::sample::{Sample, Series};
use crate::types::{NormalizedPoint, ViewBox};

/// Collaborator interface to the analytics backend (or a mock). Timeout
/// semantics live behind this seam; a fetch either yields fresh samples or a
/// recoverable error.
pub trait DataSource {
    fn fetch(&mut self) -> Result<Vec<Sample>, FetchError>;
}

/// Lifecycle of one chart instance:
/// `Empty -> Loading -> Populated -> Refreshing -> Populated -> Empty (reset)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetState {
    Empty,
    Loading,
    Refreshing,
    Populated,
}

/// One chart instance: owns its buffer and refresh timer, retains last-good
/// geometry across failed fetches, and tears down deterministically.
///
/// Each refresh tick is a discrete, completed unit of work; the cooperative
/// single-threaded contract means ticks for the same widget never overlap.
pub struct ChartWidget<S: DataSource> {
    source: S,
    buffer: SeriesBuffer,
    view: ViewBox,
    timer: RefreshTimer,
    state: WidgetState,
    geometry: Vec<NormalizedPoint>,
    error: Option<FetchError>,
}

impl<S: DataSource> ChartWidget<S> {
    /// Mount a widget. A zero buffer capacity is rejected here, before any
    /// timer or fetch work starts.
    pub fn mount(
        source: S,
        capacity: usize,
        view: ViewBox,
        refresh: RefreshConfig,
    ) -> Result<Self, ChartError> {
        Ok(Self {
            source,
            buffer: SeriesBuffer::with_capacity(capacity)?,
            view,
            timer: RefreshTimer::new(refresh),
            state: WidgetState::Empty,
            geometry: Vec::new(),
            error: None,
        })
    }

    /// Initial fetch: `Empty -> Loading -> Populated` (or error state).
    pub fn load(&mut self) {
        self.state = if self.buffer.is_empty() { WidgetState::Loading } else { WidgetState::Refreshing };
        self.run_fetch();
    }

    /// Accrue simulated/elapsed time and run every due refresh tick.
    /// Returns the number of refreshes performed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        let due = self.timer.advance(dt);
        for _ in 0..due {
            self.state = if self.buffer.is_empty() { WidgetState::Loading } else { WidgetState::Refreshing };
            self.run_fetch();
        }
        due
    }

    /// Manual retry after a failed fetch; re-invokes the same fetch path once.
    pub fn retry(&mut self) {
        debug!("manual retry requested");
        self.state = if self.buffer.is_empty() { WidgetState::Loading } else { WidgetState::Refreshing };
        self.run_fetch();
    }

    /// Clear everything (the charted entity changed): back to `Empty`.
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.geometry.clear();
        self.error = None;
        self.state = WidgetState::Empty;
    }

    /// Deterministic teardown: the timer is disarmed and never fires again.
    pub fn unmount(&mut self) {
        self.timer.stop();
    }

    fn run_fetch(&mut self) {
        self.timer.begin_tick();
        let outcome = self.source.fetch();
        self.timer.complete_tick();
        match outcome {
            Ok(samples) => {
                for s in samples {
                    self.buffer.append(s);
                }
                self.geometry = normalize(&self.buffer.snapshot(), &self.view);
                self.error = None;
                self.state = WidgetState::Populated;
            }
            Err(err) => {
                // Last-good geometry and buffer stay untouched.
                warn!("fetch failed, retaining previous geometry: {err}");
                self.error = Some(err);
                self.state = if self.buffer.is_empty() { WidgetState::Empty } else { WidgetState::Populated };
            }
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Last successfully computed geometry, in ViewBox units.
    pub fn geometry(&self) -> &[NormalizedPoint] {
        &self.geometry
    }

    /// Ordered copy of the buffered samples for adapter shaping.
    pub fn series(&self) -> Series {
        self.buffer.snapshot()
    }

    pub fn view(&self) -> &ViewBox {
        &self.view
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_refreshing_enabled(&self) -> bool {
        self.timer.is_enabled()
    }
}

impl<S: DataSource> Drop for ChartWidget<S> {
    fn drop(&mut self) {
        self.timer.stop();
    }
}
