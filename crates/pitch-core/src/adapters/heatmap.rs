// File: crates/pitch-core/src/adapters/heatmap.rs
// Summary: Pitch-zone heatmap: banded intensity cells and a coverage percentage.

use crate::classify::HeatBand;
use crate::error::ChartError;
use crate::normalize::normalize_xy;
use crate::primitives::HeatCell;
use crate::sample::PointSample;
use crate::theme::Palette;
use crate::types::ViewBox;

/// One pitch zone as reported by the analytics backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneSample {
    pub x: f64,
    pub y: f64,
    /// Intensity on the 0..100 scale the heat bands cut.
    pub intensity: f64,
    pub count: u32,
}

/// Heatmap parameters. The total zone count comes from the backend's zone
/// taxonomy and is injected here rather than assumed at call sites.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatmapConfig {
    pub zone_count: usize,
    pub base_radius: f32,
    pub max_radius: f32,
}

impl HeatmapConfig {
    pub fn new(zone_count: usize) -> Result<Self, ChartError> {
        if zone_count == 0 {
            return Err(ChartError::ZeroZoneCount);
        }
        Ok(Self { zone_count, ..Self::default() })
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        // Current pitch-zone taxonomy has 11 zones.
        Self { zone_count: 11, base_radius: 4.0, max_radius: 10.0 }
    }
}

#[derive(Clone, Debug)]
pub struct HeatmapShape {
    pub cells: Vec<HeatCell>,
    /// Percentage of the zone taxonomy with at least one delivery observed.
    pub coverage_pct: f32,
}

/// Shape zone tuples into banded cells. Zone centers normalize per axis;
/// cell radius scales with the zone's delivery count relative to the busiest
/// zone. Coverage counts occupied zones against the injected taxonomy size.
pub fn shape(
    zones: &[ZoneSample],
    view: &ViewBox,
    palette: &Palette,
    config: &HeatmapConfig,
) -> HeatmapShape {
    let finite: Vec<&ZoneSample> = zones
        .iter()
        .filter(|z| z.x.is_finite() && z.y.is_finite() && z.intensity.is_finite())
        .collect();
    let centers: Vec<PointSample> = finite.iter().map(|z| PointSample::new(z.x, z.y)).collect();
    let normalized = normalize_xy(&centers, view);

    let max_count = finite.iter().map(|z| z.count).max().unwrap_or(0).max(1);
    let cells = finite
        .iter()
        .zip(normalized.iter())
        .map(|(z, p)| {
            let band = HeatBand::of(z.intensity);
            let weight = z.count as f32 / max_count as f32;
            HeatCell {
                x: p.x,
                y: p.y,
                radius: config.base_radius + weight * (config.max_radius - config.base_radius),
                color: palette.heat_color(band),
                band,
                count: z.count,
            }
        })
        .collect();

    let occupied = finite.iter().filter(|z| z.count > 0).count();
    let coverage_pct = (occupied as f32 / config.zone_count as f32 * 100.0).min(100.0);

    HeatmapShape { cells, coverage_pct }
}
