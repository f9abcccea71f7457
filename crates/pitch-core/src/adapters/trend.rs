// File: crates/pitch-core/src/adapters/trend.rs
// Summary: Phase-trend chart: per-over rate bars plus a rolling-mean overlay on the same scale.

use crate::normalize::{normalize_values, Domain};
use crate::primitives::{points_attr, BarSpan, Polyline};
use crate::smooth::rolling_mean;
use crate::theme::Palette;
use crate::types::{NormalizedPoint, ViewBox};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrendConfig {
    /// Rolling-mean window, in overs.
    pub window: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self { window: 3 }
    }
}

#[derive(Clone, Debug)]
pub struct TrendShape {
    pub bars: Vec<BarSpan>,
    pub trend: Polyline,
}

/// Shape per-over rates into bars from the surface floor, with a rolling
/// mean drawn on the same value scale so the overlay lines up with the bars.
pub fn shape(rates: &[f64], view: &ViewBox, palette: &Palette, config: &TrendConfig) -> TrendShape {
    let finite: Vec<f64> = rates.iter().copied().filter(|v| v.is_finite()).collect();
    let points = normalize_values(&finite, view);

    let n = finite.len();
    let bar_w = if n == 0 { 0.0 } else { (view.usable_width() / n as f32).max(1.0) * 0.7 };
    let floor = view.height - view.pad_y;
    let bars = points
        .iter()
        .map(|p| BarSpan {
            x: p.x - bar_w / 2.0,
            y: p.y,
            width: bar_w,
            height: floor - p.y,
            color: palette.line_stroke,
        })
        .collect();

    // Overlay shares the raw-rate domain; its own min/max would drift off
    // the bars' scale.
    let trend_points: Vec<NormalizedPoint> = if n >= 2 {
        let domain = Domain::of(&finite).unwrap_or(Domain { min: 0.0, max: 0.0 });
        let usable_w = view.usable_width();
        let usable_h = view.usable_height();
        let mid_y = view.pad_y + usable_h / 2.0;
        rolling_mean(&finite, config.window)
            .into_iter()
            .map(|(ix, mean)| {
                let x = view.pad_x + (ix as f32 / (n - 1) as f32) * usable_w;
                let y = match domain.fraction(mean) {
                    Some(f) => (view.height - view.pad_y) - f as f32 * usable_h,
                    None => mid_y,
                };
                view.clamp(NormalizedPoint::new(x, y))
            })
            .collect()
    } else {
        Vec::new()
    };

    TrendShape {
        bars,
        trend: Polyline { points: points_attr(&trend_points), stroke: palette.trend_stroke },
    }
}
