// File: crates/pitch-core/src/primitives.rs
// Summary: Drawing primitives handed to the presentation layer, in ViewBox units.

use crate::classify::{DeliveryClass, HeatBand};
use crate::types::NormalizedPoint;

/// Render normalized points as an SVG-style `points` attribute string.
pub fn points_attr(points: &[NormalizedPoint]) -> String {
    let mut out = String::with_capacity(points.len() * 12);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{:.1},{:.1}", p.x, p.y));
    }
    out
}

/// A stroked open path.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: String,
    pub stroke: &'static str,
}

/// A filled circle marker, usually one per delivery or match.
#[derive(Clone, Debug, PartialEq)]
pub struct DotMarker {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: &'static str,
    pub class: DeliveryClass,
}

/// A filled axis-aligned bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSpan {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: &'static str,
}

/// One zone of the pitch heatmap.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatCell {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: &'static str,
    pub band: HeatBand,
    /// Deliveries observed in the zone; scales the cell radius.
    pub count: u32,
}
