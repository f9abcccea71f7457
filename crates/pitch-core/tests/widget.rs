// File: crates/pitch-core/tests/widget.rs
// Purpose: Validate the widget state machine, refresh cadence, failure retention, and teardown.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pitch_core::error::FetchError;
use pitch_core::refresh::RefreshConfig;
use pitch_core::sample::Sample;
use pitch_core::types::ViewBox;
use pitch_core::widget::{ChartWidget, DataSource, WidgetState};

/// Scripted source: counts fetches, fails on demand, yields one sample per call.
struct ScriptedSource {
    calls: Rc<RefCell<u32>>,
    failing: Rc<RefCell<bool>>,
}

impl DataSource for ScriptedSource {
    fn fetch(&mut self) -> Result<Vec<Sample>, FetchError> {
        *self.calls.borrow_mut() += 1;
        if *self.failing.borrow() {
            return Err(FetchError::new("scripted failure"));
        }
        let n = *self.calls.borrow();
        Ok(vec![Sample::new(n as f64)])
    }
}

fn scripted() -> (ScriptedSource, Rc<RefCell<u32>>, Rc<RefCell<bool>>) {
    let calls = Rc::new(RefCell::new(0));
    let failing = Rc::new(RefCell::new(false));
    let source = ScriptedSource { calls: Rc::clone(&calls), failing: Rc::clone(&failing) };
    (source, calls, failing)
}

fn view() -> ViewBox {
    ViewBox::try_new(300.0, 100.0, 8.0, 8.0).unwrap()
}

#[test]
fn mount_rejects_zero_capacity() {
    let (source, _, _) = scripted();
    assert!(ChartWidget::mount(source, 0, view(), RefreshConfig::disabled()).is_err());
}

#[test]
fn load_populates_state_and_geometry() {
    let (source, calls, _) = scripted();
    let mut w = ChartWidget::mount(source, 30, view(), RefreshConfig::disabled()).unwrap();
    assert_eq!(w.state(), WidgetState::Empty);
    assert!(w.geometry().is_empty());

    w.load();
    assert_eq!(w.state(), WidgetState::Populated);
    assert_eq!(w.geometry().len(), 1);
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn one_second_interval_fires_exactly_three_times_in_three_seconds() {
    let (source, calls, _) = scripted();
    let mut w = ChartWidget::mount(source, 30, view(), RefreshConfig::every(1)).unwrap();

    let fired = w.advance(Duration::from_secs(3));
    assert_eq!(fired, 3);
    assert_eq!(*calls.borrow(), 3);
    assert_eq!(w.series().len(), 3);
}

#[test]
fn sub_interval_steps_accumulate_without_extra_ticks() {
    let (source, calls, _) = scripted();
    let mut w = ChartWidget::mount(source, 30, view(), RefreshConfig::every(1)).unwrap();

    let mut fired = 0;
    for _ in 0..6 {
        fired += w.advance(Duration::from_millis(500));
    }
    assert_eq!(fired, 3);
    assert_eq!(*calls.borrow(), 3);
}

#[test]
fn disabled_refresh_never_ticks() {
    let (source, calls, _) = scripted();
    let mut w = ChartWidget::mount(source, 30, view(), RefreshConfig::disabled()).unwrap();
    assert_eq!(w.advance(Duration::from_secs(60)), 0);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn failed_fetch_retains_geometry_and_sets_error() {
    let (source, calls, failing) = scripted();
    let mut w = ChartWidget::mount(source, 30, view(), RefreshConfig::every(1)).unwrap();

    w.load();
    let before: Vec<_> = w.geometry().to_vec();
    assert!(!before.is_empty());

    *failing.borrow_mut() = true;
    w.advance(Duration::from_secs(1));
    assert!(w.has_error());
    assert_eq!(w.state(), WidgetState::Populated);
    assert_eq!(w.geometry(), before.as_slice());
    assert_eq!(w.series().len(), 1);

    // retry re-invokes the same fetch path exactly once
    let calls_before = *calls.borrow();
    *failing.borrow_mut() = false;
    w.retry();
    assert_eq!(*calls.borrow(), calls_before + 1);
    assert!(!w.has_error());
    assert_eq!(w.geometry().len(), 2);
}

#[test]
fn reset_returns_to_empty() {
    let (source, _, _) = scripted();
    let mut w = ChartWidget::mount(source, 30, view(), RefreshConfig::disabled()).unwrap();
    w.load();
    w.reset();
    assert_eq!(w.state(), WidgetState::Empty);
    assert!(w.geometry().is_empty());
    assert!(!w.has_error());
    assert_eq!(w.series().len(), 0);
}

#[test]
fn unmount_stops_the_timer_for_good() {
    let (source, calls, _) = scripted();
    let mut w = ChartWidget::mount(source, 30, view(), RefreshConfig::every(1)).unwrap();
    w.advance(Duration::from_secs(2));
    assert_eq!(*calls.borrow(), 2);

    w.unmount();
    assert!(!w.is_refreshing_enabled());
    assert_eq!(w.advance(Duration::from_secs(10)), 0);
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn buffer_capacity_bounds_the_series() {
    let (source, _, _) = scripted();
    let mut w = ChartWidget::mount(source, 5, view(), RefreshConfig::every(1)).unwrap();
    w.advance(Duration::from_secs(8));
    let values = w.series().values();
    assert_eq!(values, vec![4.0, 5.0, 6.0, 7.0, 8.0]);
}
