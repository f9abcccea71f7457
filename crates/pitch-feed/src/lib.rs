// File: crates/pitch-feed/src/lib.rs
// Summary: Feed library entry point; payload decoding, mock feed, CSV fixtures.

pub mod payload;
pub mod mock;
pub mod fixture;

pub use mock::MockFeed;
pub use payload::{deliveries_from_value, zones_from_value, DeliveryRecord, ZoneRecord};
