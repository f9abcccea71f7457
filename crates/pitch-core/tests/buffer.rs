// File: crates/pitch-core/tests/buffer.rs
// Purpose: Validate FIFO eviction, snapshot order, reset, and capacity validation.

use pitch_core::buffer::SeriesBuffer;
use pitch_core::error::ChartError;
use pitch_core::sample::Sample;

#[test]
fn eviction_keeps_last_capacity_samples_in_order() {
    let mut buf = SeriesBuffer::with_capacity(5).unwrap();
    for i in 0..8 {
        buf.append(Sample::new(i as f64));
    }
    assert_eq!(buf.len(), 5);
    let values = buf.snapshot().values();
    assert_eq!(values, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn duplicate_consecutive_values_are_kept() {
    let mut buf = SeriesBuffer::with_capacity(4).unwrap();
    buf.append(Sample::new(0.0));
    buf.append(Sample::new(0.0));
    buf.append(Sample::new(0.0));
    assert_eq!(buf.snapshot().values(), vec![0.0, 0.0, 0.0]);
}

#[test]
fn snapshot_is_a_copy() {
    let mut buf = SeriesBuffer::with_capacity(3).unwrap();
    buf.append(Sample::new(1.0));
    let mut snap = buf.snapshot();
    snap.push(Sample::new(2.0));
    assert_eq!(buf.len(), 1);
}

#[test]
fn reset_clears_contents() {
    let mut buf = SeriesBuffer::with_capacity(3).unwrap();
    buf.append(Sample::new(1.0));
    buf.append(Sample::new(2.0));
    buf.reset();
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 3);
    // still usable after reset
    buf.append(Sample::new(9.0));
    assert_eq!(buf.snapshot().values(), vec![9.0]);
}

#[test]
fn zero_capacity_is_a_configuration_error() {
    match SeriesBuffer::with_capacity(0) {
        Err(ChartError::ZeroCapacity) => {}
        other => panic!("expected ZeroCapacity, got {other:?}"),
    }
}
