// File: crates/plot-core/benches/render_bench.rs
// Purpose: Benchmark the full figure render with four styled series.

use criterion::{criterion_group, criterion_main, Criterion};
use plot_core::{Axis, Chart, Color, LegendPos, Marker, RenderOptions, Series};

fn four_series_chart() -> Chart {
    let mut chart = Chart::new();
    chart.title = "Frame-spaced, tile-parallel".to_string();
    chart.x_axis = Axis::new("Device count", 0.0, 400.0).with_ticks(50.0, 0);
    chart.y_axis = Axis::new("Fraction", 0.0, 1.01).with_ticks(0.25, 2);
    chart.legend = Some(LegendPos::Auto);

    let styles = [
        (Color::from_argb(255, 0x00, 0x00, 0x00), Marker::TriUp, 60.0),
        (Color::from_argb(255, 0xbb, 0x00, 0x00), Marker::TriRight, 80.0),
        (Color::from_argb(255, 0x22, 0x44, 0x77), Marker::TriDown, 100.0),
        (Color::from_argb(255, 0x00, 0x88, 0x55), Marker::TriLeft, 120.0),
    ];
    for (i, (color, marker, knee)) in styles.into_iter().enumerate() {
        let data: Vec<(f64, f64)> = (0..=80)
            .map(|k| {
                let x = k as f64 * 5.0;
                (x, 1.0 - (-x / knee).exp())
            })
            .collect();
        chart.add_series(
            Series::with_data(format!("series {i}"), data)
                .with_color(color)
                .with_marker(marker),
        );
    }
    chart
}

fn bench_render(c: &mut Criterion) {
    let chart = four_series_chart();
    let opts = RenderOptions::default();

    c.bench_function("render_png_640x480_4series", |b| {
        b.iter(|| chart.render_to_png_bytes(&opts).unwrap())
    });
    c.bench_function("render_pdf_640x480_4series", |b| {
        b.iter(|| chart.render_to_pdf_bytes(&opts).unwrap())
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
