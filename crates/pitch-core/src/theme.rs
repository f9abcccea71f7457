// File: crates/pitch-core/src/theme.rs
// Summary: Dashboard palettes mapping classes and bands to CSS hex colors.

use crate::classify::{DeliveryClass, HeatBand, StrikeRateBand};

/// Named color set consumed by the presentation layer. Colors are CSS hex
/// strings because the ViewBox is scaled into SVG/DOM, not rasterized here.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub line_stroke: &'static str,
    pub trend_stroke: &'static str,
    pub dot: &'static str,
    pub single: &'static str,
    pub double: &'static str,
    pub boundary: &'static str,
    pub wicket: &'static str,
    pub sr_high: &'static str,
    pub sr_normal: &'static str,
    pub sr_low: &'static str,
    /// Heat scale, hottest to coolest; indexed by `HeatBand::index`.
    pub heat: [&'static str; 5],
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            line_stroke: "#40a0ff",
            trend_stroke: "#ffd24a",
            dot: "#6b7280",
            single: "#93c5fd",
            double: "#60a5fa",
            boundary: "#34d399",
            wicket: "#ef4444",
            sr_high: "#22c55e",
            sr_normal: "#eab308",
            sr_low: "#f87171",
            heat: ["#dc2626", "#f97316", "#fbbf24", "#86efac", "#bfdbfe"],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            grid: "#e6e6eb",
            line_stroke: "#2078c8",
            trend_stroke: "#b45309",
            dot: "#9ca3af",
            single: "#3b82f6",
            double: "#2563eb",
            boundary: "#059669",
            wicket: "#dc2626",
            sr_high: "#16a34a",
            sr_normal: "#ca8a04",
            sr_low: "#dc2626",
            heat: ["#b91c1c", "#ea580c", "#d97706", "#65a30d", "#60a5fa"],
        }
    }

    pub fn delivery_color(&self, class: DeliveryClass) -> &'static str {
        match class {
            DeliveryClass::Dot => self.dot,
            DeliveryClass::Single => self.single,
            DeliveryClass::Double => self.double,
            DeliveryClass::Boundary => self.boundary,
            DeliveryClass::Wicket => self.wicket,
        }
    }

    pub fn strike_rate_color(&self, band: StrikeRateBand) -> &'static str {
        match band {
            StrikeRateBand::High => self.sr_high,
            StrikeRateBand::Normal => self.sr_normal,
            StrikeRateBand::Low => self.sr_low,
        }
    }

    pub fn heat_color(&self, band: HeatBand) -> &'static str {
        self.heat[band.index()]
    }
}

/// Return the built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![Palette::dark(), Palette::light()]
}

/// Find a palette by its `name`, falling back to dark.
pub fn find(name: &str) -> Palette {
    for p in presets() {
        if p.name.eq_ignore_ascii_case(name) {
            return p;
        }
    }
    Palette::dark()
}
