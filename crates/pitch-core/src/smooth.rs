// File: crates/pitch-core/src/smooth.rs
// Summary: Rolling-mean smoothing for trend overlays.

/// Rolling mean over `values` with the given window, returned as
/// (index, mean) pairs where the index is the window's last element.
/// Shorter inputs than the window produce no output.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<(f64, f64)> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(values.len() - window + 1);
    let mut sum = 0.0f64;
    for i in 0..values.len() {
        sum += values[i];
        if i + 1 >= window {
            if i + 1 > window {
                sum -= values[i - window];
            }
            out.push((i as f64, sum / window as f64));
        }
    }
    out
}
