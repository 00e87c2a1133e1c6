// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub frame: skia::Color,
    pub tick: skia::Color,
    pub label: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_frame: skia::Color,
}

impl Theme {
    /// White-background theme suitable for print figures. The default.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 40, 40, 45),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            label: skia::Color::from_argb(255, 20, 20, 30),
            legend_fill: skia::Color::from_argb(235, 255, 255, 255),
            legend_frame: skia::Color::from_argb(255, 160, 160, 170),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            label: skia::Color::from_argb(255, 235, 235, 245),
            legend_fill: skia::Color::from_argb(220, 30, 30, 34),
            legend_frame: skia::Color::from_argb(255, 90, 90, 100),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}
