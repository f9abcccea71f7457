// File: crates/pitch-core/src/adapters/mod.rs
// Summary: Per-chart-type adapters translating domain data into drawing primitives.

pub mod sparkline;
pub mod worm;
pub mod scatter;
pub mod heatmap;
pub mod trend;

pub use sparkline::SparklineShape;
pub use worm::WormShape;
pub use scatter::{FormMarker, ScatterShape};
pub use heatmap::{HeatmapConfig, HeatmapShape, ZoneSample};
pub use trend::{TrendConfig, TrendShape};
