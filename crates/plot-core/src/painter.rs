// File: crates/plot-core/src/painter.rs
// Summary: Immediate-mode drawing capability used by the renderers, with Skia and recording backends.

use skia_safe as skia;

use crate::geometry::{PointI32, RectI32};
use crate::text::TextShaper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dash,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub color: skia::Color,
    pub width: f32,
    pub style: LineStyle,
}

impl Pen {
    pub fn solid(color: skia::Color, width: f32) -> Self {
        Self { color, width, style: LineStyle::Solid }
    }
    pub fn dashed(color: skia::Color, width: f32) -> Self {
        Self { color, width, style: LineStyle::Dash }
    }
}

/// Drawing primitives the chart renderers need from a surface.
pub trait Painter {
    fn fill_rect(&mut self, rect: RectI32, color: skia::Color);
    fn stroke_rect(&mut self, rect: RectI32, pen: &Pen);
    fn fill_polygon(&mut self, points: &[PointI32], color: skia::Color);
    fn stroke_polygon(&mut self, points: &[PointI32], pen: &Pen);
    fn line(&mut self, from: PointI32, to: PointI32, pen: &Pen);
    /// Text with its left edge at `at.x` and baseline at `at.y`.
    fn text(&mut self, text: &str, at: PointI32, color: skia::Color);
    fn text_width(&self, text: &str) -> f32;
}

// ---- Skia ---------------------------------------------------------------------

/// Paints onto a borrowed Skia canvas for the duration of one paint pass.
pub struct SkiaPainter<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    draw_labels: bool,
}

impl<'a> SkiaPainter<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper, draw_labels: true }
    }

    /// Skip text entirely (deterministic output across font setups).
    pub fn without_labels(mut self) -> Self {
        self.draw_labels = false;
        self
    }

    fn stroke_paint(pen: &Pen) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(pen.color);
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(pen.width);
        if pen.style == LineStyle::Dash {
            let w = pen.width.max(1.0);
            paint.set_path_effect(skia::PathEffect::dash(&[4.0 * w, 2.0 * w], 0.0));
        }
        paint
    }

    fn fill_paint(color: skia::Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(color);
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint
    }

    fn polygon_path(points: &[PointI32]) -> skia::Path {
        let mut path = skia::Path::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to((first.x as f32, first.y as f32));
            for p in rest {
                path.line_to((p.x as f32, p.y as f32));
            }
            path.close();
        }
        path
    }

    fn rect(rect: RectI32) -> skia::Rect {
        skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32)
    }
}

impl Painter for SkiaPainter<'_> {
    fn fill_rect(&mut self, rect: RectI32, color: skia::Color) {
        self.canvas.draw_rect(Self::rect(rect), &Self::fill_paint(color));
    }

    fn stroke_rect(&mut self, rect: RectI32, pen: &Pen) {
        self.canvas.draw_rect(Self::rect(rect), &Self::stroke_paint(pen));
    }

    fn fill_polygon(&mut self, points: &[PointI32], color: skia::Color) {
        if points.len() < 3 { return; }
        self.canvas.draw_path(&Self::polygon_path(points), &Self::fill_paint(color));
    }

    fn stroke_polygon(&mut self, points: &[PointI32], pen: &Pen) {
        if points.len() < 2 { return; }
        self.canvas.draw_path(&Self::polygon_path(points), &Self::stroke_paint(pen));
    }

    fn line(&mut self, from: PointI32, to: PointI32, pen: &Pen) {
        self.canvas.draw_line(
            (from.x as f32, from.y as f32),
            (to.x as f32, to.y as f32),
            &Self::stroke_paint(pen),
        );
    }

    fn text(&mut self, text: &str, at: PointI32, color: skia::Color) {
        if !self.draw_labels { return; }
        self.shaper.draw_left(self.canvas, text, at.x as f32, at.y as f32, color);
    }

    fn text_width(&self, text: &str) -> f32 {
        self.shaper.measure_width(text)
    }
}

// ---- Recording ----------------------------------------------------------------

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    FillRect(RectI32, skia::Color),
    StrokeRect(RectI32, Pen),
    FillPolygon(Vec<PointI32>, skia::Color),
    StrokePolygon(Vec<PointI32>, Pen),
    Line(PointI32, PointI32, Pen),
    Text(String, PointI32, skia::Color),
}

/// Records every call instead of drawing. Text is measured with a fixed advance per character.
#[derive(Clone, Debug)]
pub struct RecordingPainter {
    pub ops: Vec<Op>,
    pub char_advance: f32,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self { ops: Vec::new(), char_advance: 7.0 }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Text(t, _, _) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Default for RecordingPainter {
    fn default() -> Self { Self::new() }
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, rect: RectI32, color: skia::Color) {
        self.ops.push(Op::FillRect(rect, color));
    }
    fn stroke_rect(&mut self, rect: RectI32, pen: &Pen) {
        self.ops.push(Op::StrokeRect(rect, *pen));
    }
    fn fill_polygon(&mut self, points: &[PointI32], color: skia::Color) {
        self.ops.push(Op::FillPolygon(points.to_vec(), color));
    }
    fn stroke_polygon(&mut self, points: &[PointI32], pen: &Pen) {
        self.ops.push(Op::StrokePolygon(points.to_vec(), *pen));
    }
    fn line(&mut self, from: PointI32, to: PointI32, pen: &Pen) {
        self.ops.push(Op::Line(from, to, *pen));
    }
    fn text(&mut self, text: &str, at: PointI32, color: skia::Color) {
        self.ops.push(Op::Text(text.to_string(), at, color));
    }
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_advance
    }
}
