// File: crates/coverage-plot/src/scenario.rs
// Summary: The four compared hardware configurations and their fixed chart styling.

use std::path::{Path, PathBuf};

use plot_core::{Color, Marker};

/// Hardware configuration variants compared on the chart, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    Baseline,
    MoreCapacitance,
    MorePower,
    MoreCompute,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Baseline,
        Scenario::MoreCapacitance,
        Scenario::MorePower,
        Scenario::MoreCompute,
    ];

    /// Input subdirectory under the source root.
    pub fn subdir(&self) -> &'static str {
        match self {
            Scenario::Baseline => "fstp-base",
            Scenario::MoreCapacitance => "fstp-mcap",
            Scenario::MorePower => "fstp-mpow",
            Scenario::MoreCompute => "fstp-mprc",
        }
    }

    /// Legend label.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Baseline => "Baseline",
            Scenario::MoreCapacitance => "More Capacitance",
            Scenario::MorePower => "More Power",
            Scenario::MoreCompute => "More Compute",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Scenario::Baseline => Color::from_argb(255, 0x00, 0x00, 0x00),
            Scenario::MoreCapacitance => Color::from_argb(255, 0xbb, 0x00, 0x00),
            Scenario::MorePower => Color::from_argb(255, 0x22, 0x44, 0x77),
            Scenario::MoreCompute => Color::from_argb(255, 0x00, 0x88, 0x55),
        }
    }

    pub fn marker(&self) -> Marker {
        match self {
            Scenario::Baseline => Marker::TriUp,
            Scenario::MoreCapacitance => Marker::TriRight,
            Scenario::MorePower => Marker::TriDown,
            Scenario::MoreCompute => Marker::TriLeft,
        }
    }

    /// `<source-root>/<subdir>/logs/fstp-coverage.csv`
    pub fn log_path(&self, source_root: &Path) -> PathBuf {
        source_root
            .join(self.subdir())
            .join("logs")
            .join("fstp-coverage.csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenarios_are_ordered_and_distinct() {
        assert_eq!(Scenario::ALL.len(), 4);
        assert_eq!(Scenario::ALL[0], Scenario::Baseline);
        for (i, a) in Scenario::ALL.iter().enumerate() {
            for b in Scenario::ALL.iter().skip(i + 1) {
                assert_ne!(a.subdir(), b.subdir());
                assert_ne!(a.label(), b.label());
                assert_ne!(a.color(), b.color());
                assert_ne!(a.marker(), b.marker());
            }
        }
    }

    #[test]
    fn log_path_layout() {
        let p = Scenario::MorePower.log_path(Path::new("/data/run7"));
        assert_eq!(p, Path::new("/data/run7/fstp-mpow/logs/fstp-coverage.csv"));
    }

    #[test]
    fn log_path_ignores_trailing_separator() {
        let bare = Scenario::Baseline.log_path(Path::new("/data/run7"));
        let slashed = Scenario::Baseline.log_path(Path::new("/data/run7/"));
        assert_eq!(bare, slashed);
    }
}
