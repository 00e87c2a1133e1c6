// File: crates/plot-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PDF, PNG, RGBA8) using Skia.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, ScaleKind};
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, LegendPos, HEIGHT, WIDTH};

const TITLE_SIZE: f32 = 15.0;
const LABEL_SIZE: f32 = 13.0;
const TICK_SIZE: f32 = 11.0;
const TICK_LEN: f32 = 4.0;
const LINE_WIDTH: f32 = 1.5;
const MARKER_SIZE: f32 = 4.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Margins used when `tight` is false.
    pub insets: Insets,
    /// Derive margins from the measured title/label/tick text so the figure
    /// hugs its content.
    pub tight: bool,
    pub theme: Theme,
    /// Disable to render no text at all (deterministic across font stacks).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            tight: true,
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<LegendPos>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::new("X", 0.0, 1.0),
            y_axis: Axis::new("Y", 0.0, 1.0),
            legend: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn with_legend(mut self, pos: LegendPos) -> Self {
        self.legend = Some(pos);
        self
    }

    /// Resolved legend placement: `Auto` becomes the candidate corner whose
    /// region overlaps the fewest data points. `None` when no legend is set.
    ///
    /// Candidate regions are fixed fractions of the plot rectangle, so the
    /// choice does not depend on font metrics or margins.
    pub fn legend_corner(&self) -> Option<LegendPos> {
        let pos = self.legend?;
        if pos != LegendPos::Auto {
            return Some(pos);
        }
        let mut best = LegendPos::UpperRight;
        let mut best_count = usize::MAX;
        for cand in [
            LegendPos::UpperRight,
            LegendPos::UpperLeft,
            LegendPos::LowerLeft,
            LegendPos::LowerRight,
        ] {
            let (x0, x1, y0, y1) = corner_region(cand);
            let count = self
                .series
                .iter()
                .flat_map(|s| s.data.iter())
                .filter(|&&(x, y)| {
                    let fx = axis_fraction(&self.x_axis, x);
                    let fy = axis_fraction(&self.y_axis, y);
                    fx >= x0 && fx <= x1 && fy >= y0 && fy <= y1
                })
                .count();
            if count < best_count {
                best_count = count;
                best = cand;
            }
        }
        Some(best)
    }

    /// Render to a one-page vector PDF. Parent directories are created; an
    /// existing file is overwritten.
    pub fn render_to_pdf(
        &self,
        opts: &RenderOptions,
        output_pdf_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_pdf_bytes(opts)?;
        if let Some(parent) = output_pdf_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_pdf_path, bytes)?;
        Ok(())
    }

    pub fn render_to_pdf_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        {
            let document = skia::pdf::new_document(&mut bytes, None);
            let mut document =
                document.begin_page((opts.width as f32, opts.height as f32), None);
            self.draw(document.canvas(), opts);
            document.end_page().close();
        }
        Ok(bytes)
    }

    /// Render to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to raw RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.canvas().read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    // ---- drawing ------------------------------------------------------------

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
        let insets = if opts.tight {
            self.tight_insets(shaper.as_ref())
        } else {
            opts.insets
        };

        let plot = skia::Rect::from_ltrb(
            insets.left as f32,
            insets.top as f32,
            opts.width as f32 - insets.right as f32,
            opts.height as f32 - insets.bottom as f32,
        );
        if plot.width() < 8.0 || plot.height() < 8.0 {
            return;
        }

        draw_frame_and_ticks(canvas, &plot, &self.x_axis, &self.y_axis, shaper.as_ref(), &opts.theme);
        if let Some(shaper) = shaper.as_ref() {
            self.draw_titles(canvas, &plot, &insets, shaper, &opts.theme);
        }
        draw_series_lines(canvas, &plot, &self.x_axis, &self.y_axis, &self.series);
        if let (Some(shaper), Some(corner)) = (shaper.as_ref(), self.legend_corner()) {
            draw_legend(canvas, &plot, &self.series, corner, shaper, &opts.theme);
        }
    }

    /// Margins sized to the rendered text, the moral equivalent of a tight
    /// bounding box. Fixed 8px margins when labels are disabled.
    fn tight_insets(&self, shaper: Option<&TextShaper>) -> Insets {
        let Some(shaper) = shaper else {
            return Insets::new(8, 8, 8, 8);
        };

        let mut y_tick_w = 0f32;
        for v in self.y_axis.tick_values() {
            let w = shaper.measure_width(&self.y_axis.tick_label(v), TICK_SIZE, true);
            y_tick_w = y_tick_w.max(w);
        }
        let mut left = TICK_LEN + 4.0 + y_tick_w + 6.0;
        if !self.y_axis.label.is_empty() {
            left += LABEL_SIZE * 1.4;
        }

        let mut bottom = TICK_LEN + 4.0 + TICK_SIZE * 1.3;
        if !self.x_axis.label.is_empty() {
            bottom += 6.0 + LABEL_SIZE * 1.3;
        }

        let top = if self.title.is_empty() { 10.0 } else { TITLE_SIZE * 1.5 + 8.0 };

        // Half of the last x tick label hangs past the frame.
        let right = self
            .x_axis
            .tick_values()
            .last()
            .map(|v| shaper.measure_width(&self.x_axis.tick_label(*v), TICK_SIZE, true) * 0.5 + 6.0)
            .unwrap_or(10.0)
            .max(10.0);

        Insets::new(
            left.ceil() as u32,
            right.ceil() as u32,
            top.ceil() as u32,
            bottom.ceil() as u32,
        )
    }

    fn draw_titles(
        &self,
        canvas: &skia::Canvas,
        plot: &skia::Rect,
        insets: &Insets,
        shaper: &TextShaper,
        theme: &Theme,
    ) {
        let cx = (plot.left + plot.right) * 0.5;

        if !self.title.is_empty() {
            shaper.draw_center(canvas, &self.title, cx, plot.top - 10.0, TITLE_SIZE, theme.label, false);
        }

        if !self.x_axis.label.is_empty() {
            let y = plot.bottom + TICK_LEN + TICK_SIZE * 1.4 + LABEL_SIZE;
            shaper.draw_center(canvas, &self.x_axis.label, cx, y, LABEL_SIZE, theme.label, false);
        }

        if !self.y_axis.label.is_empty() {
            let pivot_x = plot.left - insets.left as f32 + LABEL_SIZE * 0.9;
            let pivot_y = (plot.top + plot.bottom) * 0.5;
            canvas.save();
            canvas.rotate(-90.0, Some(skia::Point::new(pivot_x, pivot_y)));
            shaper.draw_center(canvas, &self.y_axis.label, pivot_x, pivot_y + LABEL_SIZE * 0.3, LABEL_SIZE, theme.label, false);
            canvas.restore();
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Position of `v` along the axis range, 0.0 at `min` and 1.0 at `max`.
fn axis_fraction(axis: &Axis, v: f64) -> f64 {
    match axis.kind {
        ScaleKind::Linear => {
            let span = (axis.max - axis.min).max(1e-12);
            (v - axis.min) / span
        }
        ScaleKind::Log10 => {
            let lo = axis.min.max(1e-12).log10();
            let hi = axis.max.max(1e-12).log10();
            let span = (hi - lo).max(1e-12);
            (v.max(1e-12).log10() - lo) / span
        }
    }
}

fn sx(plot: &skia::Rect, axis: &Axis, x: f64) -> f32 {
    plot.left + axis_fraction(axis, x) as f32 * plot.width()
}

fn sy(plot: &skia::Rect, axis: &Axis, y: f64) -> f32 {
    plot.bottom - axis_fraction(axis, y) as f32 * plot.height()
}

/// Candidate legend region as plot fractions: `(x0, x1, y0, y1)` with y
/// measured upward from the bottom of the plot.
fn corner_region(pos: LegendPos) -> (f64, f64, f64, f64) {
    const W: f64 = 0.32;
    const H: f64 = 0.30;
    match pos {
        LegendPos::UpperRight | LegendPos::Auto => (1.0 - W, 1.0, 1.0 - H, 1.0),
        LegendPos::UpperLeft => (0.0, W, 1.0 - H, 1.0),
        LegendPos::LowerLeft => (0.0, W, 0.0, H),
        LegendPos::LowerRight => (1.0 - W, 1.0, 0.0, H),
    }
}

fn draw_frame_and_ticks(
    canvas: &skia::Canvas,
    plot: &skia::Rect,
    x_axis: &Axis,
    y_axis: &Axis,
    shaper: Option<&TextShaper>,
    theme: &Theme,
) {
    let mut frame_paint = skia::Paint::default();
    frame_paint.set_color(theme.frame);
    frame_paint.set_anti_alias(true);
    frame_paint.set_style(skia::paint::Style::Stroke);
    frame_paint.set_stroke_width(1.0);
    canvas.draw_rect(*plot, &frame_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    for v in x_axis.tick_values() {
        let px = sx(plot, x_axis, v);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + TICK_LEN), &tick_paint);
        if let Some(shaper) = shaper {
            let y = plot.bottom + TICK_LEN + TICK_SIZE;
            shaper.draw_center(canvas, &x_axis.tick_label(v), px, y, TICK_SIZE, theme.label, true);
        }
    }

    for v in y_axis.tick_values() {
        let py = sy(plot, y_axis, v);
        canvas.draw_line((plot.left - TICK_LEN, py), (plot.left, py), &tick_paint);
        if let Some(shaper) = shaper {
            let label = y_axis.tick_label(v);
            let w = shaper.measure_width(&label, TICK_SIZE, true);
            let x = plot.left - TICK_LEN - 4.0 - w;
            shaper.draw_left(canvas, &label, x, py + TICK_SIZE * 0.4, TICK_SIZE, theme.label, true);
        }
    }
}

fn draw_series_lines(
    canvas: &skia::Canvas,
    plot: &skia::Rect,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &[Series],
) {
    canvas.save();
    canvas.clip_rect(*plot, None, true);

    for s in series {
        if s.is_empty() {
            continue;
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(LINE_WIDTH);
        stroke.set_color(s.color);

        if s.data.len() >= 2 {
            let mut path_builder = skia::PathBuilder::new();
            let (x0, y0) = s.data[0];
            path_builder.move_to((sx(plot, x_axis, x0), sy(plot, y_axis, y0)));
            for &(x, y) in s.data.iter().skip(1) {
                path_builder.line_to((sx(plot, x_axis, x), sy(plot, y_axis, y)));
            }
            let path = path_builder.detach();
            canvas.draw_path(&path, &stroke);
        }

        if let Some(marker) = s.marker {
            let mut marker_paint = skia::Paint::default();
            marker_paint.set_anti_alias(true);
            marker_paint.set_style(skia::paint::Style::Stroke);
            marker_paint.set_stroke_width(1.2);
            marker_paint.set_color(s.color);
            for &(x, y) in &s.data {
                let center = (sx(plot, x_axis, x), sy(plot, y_axis, y));
                marker.draw(canvas, center, MARKER_SIZE, &marker_paint);
            }
        }
    }

    canvas.restore();
}

fn draw_legend(
    canvas: &skia::Canvas,
    plot: &skia::Rect,
    series: &[Series],
    corner: LegendPos,
    shaper: &TextShaper,
    theme: &Theme,
) {
    if series.is_empty() {
        return;
    }

    const SAMPLE_W: f32 = 26.0;
    const ROW_H: f32 = 17.0;
    const PAD: f32 = 8.0;
    const MARGIN: f32 = 10.0;

    let label_w = series
        .iter()
        .map(|s| shaper.measure_width(&s.label, TICK_SIZE, false))
        .fold(0f32, f32::max);
    let box_w = PAD + SAMPLE_W + 6.0 + label_w + PAD;
    let box_h = PAD * 2.0 + ROW_H * series.len() as f32;

    let rect = match corner {
        LegendPos::UpperLeft => {
            skia::Rect::from_xywh(plot.left + MARGIN, plot.top + MARGIN, box_w, box_h)
        }
        LegendPos::LowerLeft => {
            skia::Rect::from_xywh(plot.left + MARGIN, plot.bottom - MARGIN - box_h, box_w, box_h)
        }
        LegendPos::LowerRight => skia::Rect::from_xywh(
            plot.right - MARGIN - box_w,
            plot.bottom - MARGIN - box_h,
            box_w,
            box_h,
        ),
        // Auto has been resolved by the caller; treat a stray value as upper-right.
        LegendPos::UpperRight | LegendPos::Auto => {
            skia::Rect::from_xywh(plot.right - MARGIN - box_w, plot.top + MARGIN, box_w, box_h)
        }
    };

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_fill);
    canvas.draw_rect(rect, &fill);

    let mut frame = skia::Paint::default();
    frame.set_anti_alias(true);
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(1.0);
    frame.set_color(theme.legend_frame);
    canvas.draw_rect(rect, &frame);

    for (i, s) in series.iter().enumerate() {
        let row_cy = rect.top + PAD + ROW_H * i as f32 + ROW_H * 0.5;
        let sample_x0 = rect.left + PAD;

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(LINE_WIDTH);
        stroke.set_color(s.color);
        canvas.draw_line((sample_x0, row_cy), (sample_x0 + SAMPLE_W, row_cy), &stroke);
        if let Some(marker) = s.marker {
            let mut marker_paint = stroke.clone();
            marker_paint.set_stroke_width(1.2);
            marker.draw(canvas, (sample_x0 + SAMPLE_W * 0.5, row_cy), MARKER_SIZE, &marker_paint);
        }

        shaper.draw_left(
            canvas,
            &s.label,
            sample_x0 + SAMPLE_W + 6.0,
            row_cy + TICK_SIZE * 0.35,
            TICK_SIZE,
            theme.label,
            false,
        );
    }
}
