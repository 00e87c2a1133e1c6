// File: crates/plot-core/tests/ticks.rs
// Purpose: Tick generation, label formatting, and legend corner selection.

use plot_core::grid::{arange, linspace};
use plot_core::{Axis, Chart, LegendPos, Series};

#[test]
fn device_count_axis_ticks() {
    let axis = Axis::new("Device count", 0.0, 400.0).with_ticks(50.0, 0);
    let ticks = axis.tick_values();
    assert_eq!(ticks.len(), 9, "0..=400 stepped by 50");
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(400.0));
    assert_eq!(axis.tick_label(0.0), "0");
    assert_eq!(axis.tick_label(400.0), "400");
}

#[test]
fn fraction_axis_ticks() {
    let axis = Axis::new("Fraction", 0.0, 1.01).with_ticks(0.25, 2);
    let ticks = axis.tick_values();
    assert_eq!(ticks, vec![0.0, 0.25, 0.5, 0.75, 1.0], "1.25 lies past 1.01");
    let labels: Vec<String> = ticks.iter().map(|&v| axis.tick_label(v)).collect();
    assert_eq!(labels, vec!["0.00", "0.25", "0.50", "0.75", "1.00"]);
}

#[test]
fn axis_without_spec_has_no_ticks() {
    let axis = Axis::new("X", 0.0, 10.0);
    assert!(axis.tick_values().is_empty());
}

#[test]
fn arange_guards_bad_steps() {
    assert!(arange(0.0, 10.0, 0.0).is_empty());
    assert!(arange(0.0, 10.0, -1.0).is_empty());
    assert!(arange(10.0, 0.0, 1.0).is_empty());
}

#[test]
fn linspace_includes_endpoints() {
    let vals = linspace(0.0, 4.0, 5);
    assert_eq!(vals, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn auto_legend_avoids_populated_corners() {
    // Rising curve: points occupy lower-left and upper-right, so the first
    // free candidate in preference order is the upper-left.
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 400.0);
    chart.y_axis = Axis::new("Y", 0.0, 1.0);
    chart.legend = Some(LegendPos::Auto);
    let data: Vec<(f64, f64)> = (0..=8).map(|i| (i as f64 * 50.0, i as f64 / 8.0)).collect();
    chart.add_series(Series::with_data("rising", data));
    assert_eq!(chart.legend_corner(), Some(LegendPos::UpperLeft));

    // Points pinned along the top edge leave only the bottom corners free.
    let mut flat = Chart::new();
    flat.x_axis = Axis::new("X", 0.0, 400.0);
    flat.y_axis = Axis::new("Y", 0.0, 1.0);
    flat.legend = Some(LegendPos::Auto);
    let data: Vec<(f64, f64)> = (0..=8).map(|i| (i as f64 * 50.0, 0.98)).collect();
    flat.add_series(Series::with_data("flat", data));
    assert_eq!(flat.legend_corner(), Some(LegendPos::LowerLeft));
}

#[test]
fn explicit_legend_corner_is_kept() {
    let mut chart = Chart::new();
    chart.legend = Some(LegendPos::LowerRight);
    assert_eq!(chart.legend_corner(), Some(LegendPos::LowerRight));
    chart.legend = None;
    assert_eq!(chart.legend_corner(), None);
}
