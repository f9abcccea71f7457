// File: crates/pitch-feed/src/payload.rs
// Summary: Tolerant decoding of backend analytics payloads into core sample types.

use log::warn;
use serde::Deserialize;
use serde_json::Value;

use pitch_core::adapters::ZoneSample;
use pitch_core::sample::Sample;

/// One delivery as the analytics backend reports it. Missing fields decode
/// to their defaults; charts must never crash on sparse payloads.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DeliveryRecord {
    #[serde(default)]
    pub runs: f64,
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl DeliveryRecord {
    pub fn into_sample(self) -> Sample {
        let marked = self.kind.eq_ignore_ascii_case("wicket");
        let mut sample = Sample::new(self.runs);
        if marked {
            sample = sample.marked();
        }
        if !self.kind.is_empty() {
            sample = sample.with_category(self.kind);
        }
        sample
    }
}

/// One pitch zone as the analytics backend reports it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ZoneRecord {
    #[serde(default)]
    pub x_coordinate: f64,
    #[serde(default)]
    pub y_coordinate: f64,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub count: u32,
}

impl ZoneRecord {
    pub fn into_zone(self) -> ZoneSample {
        ZoneSample {
            x: self.x_coordinate,
            y: self.y_coordinate,
            intensity: self.value,
            count: self.count,
        }
    }
}

/// Decode a delivery payload. `null` or non-array payloads are an empty
/// series; entries that fail to decode are skipped, not fatal.
pub fn deliveries_from_value(payload: &Value) -> Vec<Sample> {
    records(payload)
        .into_iter()
        .map(DeliveryRecord::into_sample)
        .collect()
}

/// Decode a zone payload with the same tolerance rules.
pub fn zones_from_value(payload: &Value) -> Vec<ZoneSample> {
    records::<ZoneRecord>(payload)
        .into_iter()
        .map(ZoneRecord::into_zone)
        .collect()
}

fn records<T: for<'de> Deserialize<'de>>(payload: &Value) -> Vec<T> {
    let items = match payload.as_array() {
        Some(items) => items,
        None => {
            if !payload.is_null() {
                warn!("expected an array payload, got {payload_kind}", payload_kind = kind(payload));
            }
            return Vec::new();
        }
    };
    let mut out = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for item in items {
        match serde_json::from_value::<T>(item.clone()) {
            Ok(record) => out.push(record),
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("skipped {skipped} undecodable payload entr(ies)");
    }
    out
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
