// File: crates/pitch-core/src/normalize.rs
// Summary: Domain computation and 1D/2D normalization into a ViewBox with degenerate fallbacks.

use log::warn;

use crate::sample::{PointSample, Series};
use crate::types::{NormalizedPoint, ViewBox};

/// Value domain of a series: [min, max] over finite values only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Compute the domain of `values`, ignoring non-finite entries.
    /// Returns `None` when no finite value remains.
    pub fn of(values: &[f64]) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any = false;
        for &v in values {
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
        if any { Some(Self { min, max }) } else { None }
    }

    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `v` within the domain as a 0..=1 fraction.
    /// A zero-range domain has no defined fraction.
    #[inline]
    pub fn fraction(&self, v: f64) -> Option<f64> {
        let range = self.range();
        if range == 0.0 { None } else { Some((v - self.min) / range) }
    }
}

/// Map a series into ViewBox coordinates.
///
/// Non-finite values are dropped before mapping; the output length equals the
/// count of finite samples. Empty input maps to an empty output (callers draw
/// a "no data" placeholder). A single sample sits at the horizontal center;
/// a zero-range domain draws a flat line at mid-height. All coordinates stay
/// inside the padded region no matter how extreme the input range is.
pub fn normalize(series: &Series, view: &ViewBox) -> Vec<NormalizedPoint> {
    normalize_values(&series.values(), view)
}

/// Value-slice form of [`normalize`]; same fallback rules.
pub fn normalize_values(values: &[f64], view: &ViewBox) -> Vec<NormalizedPoint> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let dropped = values.len() - finite.len();
    if dropped > 0 {
        warn!("dropped {dropped} non-finite sample(s) before normalization");
    }
    if finite.is_empty() {
        return Vec::new();
    }

    let n = finite.len();
    let usable_w = view.usable_width();
    let usable_h = view.usable_height();
    let mid_y = view.pad_y + usable_h / 2.0;
    // Domain over an all-finite slice always exists.
    let domain = Domain::of(&finite).unwrap_or(Domain { min: 0.0, max: 0.0 });

    let mut out = Vec::with_capacity(n);
    for (i, &v) in finite.iter().enumerate() {
        let x = if n == 1 {
            view.pad_x + usable_w / 2.0
        } else {
            view.pad_x + (i as f32 / (n - 1) as f32) * usable_w
        };
        // Inverted: surface origin is top-left, larger values render higher.
        let y = match domain.fraction(v) {
            Some(f) => (view.height - view.pad_y) - f as f32 * usable_h,
            None => mid_y,
        };
        out.push(view.clamp(NormalizedPoint::new(x, y)));
    }
    out
}

/// Map a 2D point set into ViewBox coordinates.
///
/// The x and y domains are normalized independently with the same
/// min/max/range/degenerate rules per axis; there is no shared scale. A
/// degenerate axis collapses to its midline. Points with a non-finite
/// coordinate on either axis are dropped.
pub fn normalize_xy(points: &[PointSample], view: &ViewBox) -> Vec<NormalizedPoint> {
    let finite: Vec<PointSample> = points
        .iter()
        .copied()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();
    let dropped = points.len() - finite.len();
    if dropped > 0 {
        warn!("dropped {dropped} non-finite point(s) before normalization");
    }
    if finite.is_empty() {
        return Vec::new();
    }

    let xs: Vec<f64> = finite.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = finite.iter().map(|p| p.y).collect();
    let dx = Domain::of(&xs).unwrap_or(Domain { min: 0.0, max: 0.0 });
    let dy = Domain::of(&ys).unwrap_or(Domain { min: 0.0, max: 0.0 });

    let usable_w = view.usable_width();
    let usable_h = view.usable_height();
    let mid_x = view.pad_x + usable_w / 2.0;
    let mid_y = view.pad_y + usable_h / 2.0;

    finite
        .iter()
        .map(|p| {
            let x = match dx.fraction(p.x) {
                Some(f) => view.pad_x + f as f32 * usable_w,
                None => mid_x,
            };
            let y = match dy.fraction(p.y) {
                Some(f) => (view.height - view.pad_y) - f as f32 * usable_h,
                None => mid_y,
            };
            view.clamp(NormalizedPoint::new(x, y))
        })
        .collect()
}
