// File: crates/pitch-feed/src/fixture.rs
// Summary: CSV delivery fixture loader for offline demos and tests.

use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use pitch_core::sample::Sample;

/// Load deliveries from a CSV with `runs` and optional `type` columns.
/// Header matching is case-insensitive; rows that fail to parse are skipped.
pub fn load_deliveries_csv(path: impl AsRef<Path>) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let runs_idx = headers
        .iter()
        .position(|h| h == "runs")
        .context("missing 'runs' column")?;
    let kind_idx = headers.iter().position(|h| h == "type");

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for row in rdr.records() {
        let row = row?;
        let runs = match row.get(runs_idx).and_then(|f| f.trim().parse::<f64>().ok()) {
            Some(v) => v,
            None => {
                skipped += 1;
                continue;
            }
        };
        let kind = kind_idx
            .and_then(|i| row.get(i))
            .map(str::trim)
            .unwrap_or("");
        let mut sample = Sample::new(runs);
        if kind.eq_ignore_ascii_case("wicket") {
            sample = sample.marked();
        }
        if !kind.is_empty() {
            sample = sample.with_category(kind);
        }
        out.push(sample);
    }
    if skipped > 0 {
        warn!("skipped {skipped} unparsable CSV row(s) in {}", path.display());
    }
    Ok(out)
}
