// File: crates/coverage-plot/src/main.rs
// Summary: Loads four scenario coverage logs and renders the comparison chart to PDF.

mod loader;
mod scenario;

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use plot_core::{Axis, Chart, LegendPos, RenderOptions, Series};

use crate::loader::load_coverage_csv;
use crate::scenario::Scenario;

const OUTPUT_NAME: &str = "fstp-coverage.pdf";

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&args)
}

/// Entire pipeline: check arguments, load the four logs, render the chart.
fn run(args: &[String]) -> Result<()> {
    let [source_root, destination_root] = args else {
        // Any other argument count prints usage and falls through without
        // touching the filesystem. Not an error exit.
        eprintln!("Usage: coverage-plot <source-root> <destination-root>");
        return Ok(());
    };
    let source_root = Path::new(source_root);
    let destination_root = Path::new(destination_root);

    let mut chart = Chart::new();
    chart.title = "Frame-spaced, tile-parallel".to_string();
    chart.x_axis = Axis::new("Device count", 0.0, 400.0).with_ticks(50.0, 0);
    chart.y_axis = Axis::new("Fraction", 0.0, 1.01).with_ticks(0.25, 2);
    chart.legend = Some(LegendPos::Auto);

    for scenario in Scenario::ALL {
        let path = scenario.log_path(source_root);
        let coverage = load_coverage_csv(&path)
            .with_context(|| format!("loading the {} log", scenario.label()))?;
        info!("{}: {} rows from {}", scenario.label(), coverage.len(), path.display());
        chart.add_series(
            Series::with_data(scenario.label(), coverage.points())
                .with_color(scenario.color())
                .with_marker(scenario.marker()),
        );
    }

    let output = destination_root.join(OUTPUT_NAME);
    let opts = RenderOptions::default();
    debug!("rendering {}x{} figure", opts.width, opts.height);
    chart
        .render_to_pdf(&opts, &output)
        .with_context(|| format!("writing {}", output.display()))?;
    info!("wrote {}", output.display());
    Ok(())
}
