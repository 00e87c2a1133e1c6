// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod axis;
pub mod chart;
pub mod grid;
pub mod marker;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, ScaleKind, TickSpec};
pub use chart::{Chart, RenderOptions};
pub use marker::Marker;
pub use series::Series;
pub use skia_safe::Color;
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{Insets, LegendPos};
