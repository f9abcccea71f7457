// File: crates/pitch-core/src/adapters/worm.rs
// Summary: Cumulative-runs "worm" chart with wicket markers at the fall-of-wicket total.

use crate::classify::DeliveryClass;
use crate::normalize::normalize_values;
use crate::primitives::{points_attr, DotMarker, Polyline};
use crate::sample::{Sample, Series};
use crate::theme::Palette;
use crate::types::ViewBox;

const WICKET_RADIUS: f32 = 3.5;

#[derive(Clone, Debug)]
pub struct WormShape {
    pub outline: Polyline,
    pub wickets: Vec<DotMarker>,
}

/// Shape a running-total line from per-delivery runs. Wicket markers sit on
/// the worm at the cumulative total where the wicket fell.
pub fn shape(deliveries: &Series, view: &ViewBox, palette: &Palette) -> WormShape {
    let finite: Vec<&Sample> = deliveries.iter().filter(|s| s.value.is_finite()).collect();

    let mut total = 0.0f64;
    let cumulative: Vec<f64> = finite
        .iter()
        .map(|s| {
            total += s.value;
            total
        })
        .collect();
    let points = normalize_values(&cumulative, view);

    let wickets = finite
        .iter()
        .zip(points.iter())
        .filter(|(s, _)| s.marked)
        .map(|(_, p)| DotMarker {
            x: p.x,
            y: p.y,
            radius: WICKET_RADIUS,
            color: palette.wicket,
            class: DeliveryClass::Wicket,
        })
        .collect();

    WormShape {
        outline: Polyline { points: points_attr(&points), stroke: palette.line_stroke },
        wickets,
    }
}
