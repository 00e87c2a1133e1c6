// File: crates/plot-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use plot_core::{Axis, Chart, RenderOptions, Series, Theme};

fn line_chart() -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data("diag", vec![(0.0, 0.0), (4.0, 4.0)]));
    chart
}

#[test]
fn render_rgba8_buffer() {
    let chart = line_chart();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);

    // Top-left pixel is the light theme background (opaque white, RGBA)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // The stroked series must have left non-background pixels somewhere
    let touched = px.chunks_exact(4).any(|p| p != [255, 255, 255, 255]);
    assert!(touched, "series stroke should reach the buffer");
}

#[test]
fn themes_change_background() {
    let chart = line_chart();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = Theme::dark();
    let (px, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}
