// File: crates/plot-core/src/axis.rs
// Summary: Axis model with fixed-interval ticks and fixed-precision labels.

use crate::grid::arange;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// Fixed tick interval plus the fraction-digit count used for tick labels.
#[derive(Clone, Copy, Debug)]
pub struct TickSpec {
    pub step: f64,
    pub decimals: usize,
}

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    pub ticks: Option<TickSpec>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear, ticks: None }
    }

    /// Attach a fixed tick interval with `decimals` fraction digits per label.
    pub fn with_ticks(mut self, step: f64, decimals: usize) -> Self {
        self.ticks = Some(TickSpec { step, decimals });
        self
    }

    /// Ascending tick positions from `min` while `v <= max + eps`.
    /// Empty when no tick spec is set.
    pub fn tick_values(&self) -> Vec<f64> {
        match self.ticks {
            Some(spec) => arange(self.min, self.max, spec.step),
            None => Vec::new(),
        }
    }

    /// Format a tick value with the configured precision.
    /// Zero decimals prints an integer label.
    pub fn tick_label(&self, v: f64) -> String {
        let decimals = self.ticks.map(|t| t.decimals).unwrap_or(0);
        if decimals == 0 {
            format!("{}", v.round() as i64)
        } else {
            format!("{v:.decimals$}")
        }
    }
}
