// File: crates/pitch-core/src/adapters/scatter.rs
// Summary: Per-match form scatter; circles colored by the strike-rate band of y.

use crate::classify::StrikeRateBand;
use crate::normalize::normalize_xy;
use crate::sample::PointSample;
use crate::theme::Palette;
use crate::types::ViewBox;

const MARKER_RADIUS: f32 = 3.0;

/// A scatter circle; `band` reflects the raw (pre-normalization) y value.
#[derive(Clone, Debug, PartialEq)]
pub struct FormMarker {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: &'static str,
    pub band: StrikeRateBand,
}

#[derive(Clone, Debug)]
pub struct ScatterShape {
    pub points: Vec<FormMarker>,
}

/// Shape per-match pairs (x: match index or average, y: strike rate). Axes
/// normalize independently; banding always uses the raw strike rate.
pub fn shape(pairs: &[PointSample], view: &ViewBox, palette: &Palette) -> ScatterShape {
    let finite: Vec<PointSample> = pairs
        .iter()
        .copied()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();
    let normalized = normalize_xy(&finite, view);

    let points = finite
        .iter()
        .zip(normalized.iter())
        .map(|(raw, p)| {
            let band = StrikeRateBand::of(raw.y);
            FormMarker {
                x: p.x,
                y: p.y,
                radius: MARKER_RADIUS,
                color: palette.strike_rate_color(band),
                band,
            }
        })
        .collect();

    ScatterShape { points }
}
