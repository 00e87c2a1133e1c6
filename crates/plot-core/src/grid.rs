// File: crates/plot-core/src/grid.rs
// Summary: Tick layout helpers.

/// Evenly spaced values including both endpoints.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Fixed-step values from `start` while `v <= stop + eps`.
/// The epsilon admits endpoints that land exactly on the boundary (400 for an
/// axis 0..=400 stepped by 50) without picking up a full extra step.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || stop < start {
        return Vec::new();
    }
    let eps = step * 1e-9;
    let mut out = Vec::new();
    for i in 0.. {
        let v = start + step * i as f64;
        if v > stop + eps || out.len() >= 10_000 {
            break;
        }
        out.push(v);
    }
    out
}
