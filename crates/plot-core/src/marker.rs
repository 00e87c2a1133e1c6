// File: crates/plot-core/src/marker.rs
// Summary: Point marker glyphs stroked at data positions.

use skia_safe as skia;

/// Marker glyph drawn at each data point of a series.
///
/// The `Tri*` variants are three strokes radiating from the point, 120
/// degrees apart, with one arm pointing in the named direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    TriDown,
    TriUp,
    TriLeft,
    TriRight,
}

impl Marker {
    /// Stroke the glyph centered at `center`. `size` is the arm length for
    /// the `Tri*` glyphs and the diameter for `Circle`.
    pub fn draw(&self, canvas: &skia::Canvas, center: (f32, f32), size: f32, paint: &skia::Paint) {
        let (cx, cy) = center;
        // screen coordinates: +y points down
        let base_deg = match self {
            Marker::Circle => {
                canvas.draw_circle((cx, cy), size * 0.5, paint);
                return;
            }
            Marker::TriDown => 90.0f32,
            Marker::TriUp => -90.0f32,
            Marker::TriLeft => 180.0f32,
            Marker::TriRight => 0.0f32,
        };
        for k in 0..3 {
            let a = (base_deg + 120.0 * k as f32).to_radians();
            canvas.draw_line((cx, cy), (cx + a.cos() * size, cy + a.sin() * size), paint);
        }
    }
}
