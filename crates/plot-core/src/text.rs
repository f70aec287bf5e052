// File: crates/plot-core/src/text.rs
// Summary: Label shaping, measuring and drawing via Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Point size used for every chart label.
pub const LABEL_SIZE: f32 = 12.0;

pub struct TextShaper {
    fonts: FontCollection,
    size: f32,
}

impl TextShaper {
    pub fn new() -> Self {
        Self::with_size(LABEL_SIZE)
    }

    pub fn with_size(size: f32) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, size: size.max(1.0) }
    }

    fn layout(&self, text: &str, color: skia::Color) -> Paragraph {
        let mut ts = TextStyle::new();
        ts.set_font_size(self.size);
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Horizontal advance of `text`.
    pub fn measure_width(&self, text: &str) -> f32 {
        self.layout(text, skia::Color::TRANSPARENT).longest_line()
    }

    /// Draw with the baseline at `y`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, color: skia::Color) {
        let p = self.layout(text, color);
        // Paragraph draws from top-left; shift up by the first line's ascent.
        let ascent = p.alphabetic_baseline();
        p.paint(canvas, (x, y - ascent));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
