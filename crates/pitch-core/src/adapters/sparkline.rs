// File: crates/pitch-core/src/adapters/sparkline.rs
// Summary: Delivery-by-delivery sparkline: runs outline plus class-colored ball markers.

use crate::classify::DeliveryClass;
use crate::normalize::normalize_values;
use crate::primitives::{points_attr, DotMarker, Polyline};
use crate::sample::{Sample, Series};
use crate::theme::Palette;
use crate::types::ViewBox;

const BALL_RADIUS: f32 = 2.5;
const WICKET_RADIUS: f32 = 4.0;

#[derive(Clone, Debug)]
pub struct SparklineShape {
    pub outline: Polyline,
    pub markers: Vec<DotMarker>,
}

/// Shape a per-delivery runs series. Sample `value` is runs off the ball and
/// `marked` flags a dismissal; wickets keep the wicket color and a larger
/// radius whatever the runs were.
pub fn shape(deliveries: &Series, view: &ViewBox, palette: &Palette) -> SparklineShape {
    let finite: Vec<&Sample> = deliveries.iter().filter(|s| s.value.is_finite()).collect();
    let values: Vec<f64> = finite.iter().map(|s| s.value).collect();
    let points = normalize_values(&values, view);

    let markers = finite
        .iter()
        .zip(points.iter())
        .map(|(s, p)| {
            let class = DeliveryClass::of(s.value.max(0.0) as u32, s.marked);
            let radius = if class == DeliveryClass::Wicket { WICKET_RADIUS } else { BALL_RADIUS };
            DotMarker {
                x: p.x,
                y: p.y,
                radius,
                color: palette.delivery_color(class),
                class,
            }
        })
        .collect();

    SparklineShape {
        outline: Polyline { points: points_attr(&points), stroke: palette.line_stroke },
        markers,
    }
}
