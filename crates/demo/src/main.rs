// File: crates/demo/src/main.rs
// Summary: Demo drives a simulated innings through the widgets and prints the derived primitives.

use std::time::Duration;

use anyhow::{Context, Result};

use pitch_core::adapters::{heatmap, scatter, sparkline, trend, worm};
use pitch_core::adapters::{HeatmapConfig, TrendConfig};
use pitch_core::refresh::RefreshConfig;
use pitch_core::sample::{PointSample, Series};
use pitch_core::theme;
use pitch_core::types::ViewBox;
use pitch_core::widget::ChartWidget;
use pitch_feed::{deliveries_from_value, MockFeed};

fn main() -> Result<()> {
    let palette = theme::find(&std::env::args().nth(2).unwrap_or_else(|| "dark".to_string()));
    let view = ViewBox::try_new(300.0, 100.0, 8.0, 8.0).context("view box")?;

    // Deliveries come from a CSV fixture when a path is given, otherwise from
    // the seeded mock feed via the widget's polling path.
    let deliveries: Series = match std::env::args().nth(1) {
        Some(path) => {
            let samples = pitch_feed::fixture::load_deliveries_csv(&path)
                .with_context(|| format!("failed to load CSV '{path}'"))?;
            println!("Loaded {} deliveries from {path}", samples.len());
            Series::from_samples(samples)
        }
        None => {
            let feed = MockFeed::seeded(42, 6);
            let mut widget = ChartWidget::mount(feed, 120, view, RefreshConfig::every(10))?;
            widget.load();
            // five simulated polling cycles, one over per tick
            widget.advance(Duration::from_secs(50));
            println!("Mock innings: {} deliveries buffered", widget.series().len());
            let series = widget.series();
            widget.unmount();
            series
        }
    };

    // 1) Sparkline: runs per delivery with class-colored markers
    let spark = sparkline::shape(&deliveries, &view, &palette);
    println!("\nSparkline outline: {}", spark.outline.points);
    for m in spark.markers.iter().take(8) {
        println!("  {:>8} at {:.1},{:.1}  {}", m.class.label(), m.x, m.y, m.color);
    }

    // 2) Worm: cumulative total with fall-of-wicket markers
    let w = worm::shape(&deliveries, &view, &palette);
    println!("\nWorm outline: {} points, {} wickets", w.outline.points.split(' ').count(), w.wickets.len());

    // 3) Form scatter: strike rate per recent match
    let form = [
        PointSample::new(1.0, 132.4),
        PointSample::new(2.0, 101.0),
        PointSample::new(3.0, 86.2),
        PointSample::new(4.0, 120.0),
    ];
    let sc = scatter::shape(&form, &view, &palette);
    println!("\nForm scatter:");
    for p in &sc.points {
        println!("  {:>6} at {:.1},{:.1}", p.band.label(), p.x, p.y);
    }

    // 4) Heatmap: zone intensities from the mock, taxonomy size injected
    let mut zone_feed = MockFeed::seeded(7, 6);
    let config = HeatmapConfig::new(11).context("heatmap config")?;
    let zones = zone_feed.roll_zones(config.zone_count);
    let hm = heatmap::shape(&zones, &view, &palette, &config);
    println!("\nHeatmap: {} cells, {:.0}% of zones covered", hm.cells.len(), hm.coverage_pct);

    // 5) Phase trend: per-over run totals with a rolling mean
    let rates: Vec<f64> = (0..deliveries.len() / 6)
        .map(|over| {
            deliveries.samples[over * 6..(over + 1) * 6]
                .iter()
                .map(|s| s.value)
                .sum()
        })
        .collect();
    let tr = trend::shape(&rates, &view, &palette, &TrendConfig::default());
    println!("\nTrend: {} bars, overlay '{}'", tr.bars.len(), tr.trend.points);

    // A malformed backend payload degrades to an empty series, never a crash.
    let broken = serde_json::json!({"error": "analytics service unavailable"});
    println!("\nMalformed payload decodes to {} samples", deliveries_from_value(&broken).len());

    Ok(())
}
