// File: crates/plot-core/src/series.rs
// Summary: Line series model: (x, y) points plus fixed label/color/marker styling.

use skia_safe as skia;

use crate::marker::Marker;

/// One plotted line. Styling is fixed by the caller, never data-driven.
#[derive(Clone)]
pub struct Series {
    pub label: String,
    pub color: skia::Color,
    pub marker: Option<Marker>,
    pub data: Vec<(f64, f64)>,
}

impl Series {
    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            color: skia::Color::from_argb(255, 32, 120, 200),
            marker: None,
            data,
        }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }
}
