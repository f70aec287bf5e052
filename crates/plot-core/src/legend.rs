// File: crates/plot-core/src/legend.rs
// Summary: Series legend: swatch + label per series, laid out left to right below the plot band.

use crate::geometry::{PointI32, RectI32};
use crate::painter::{Painter, Pen};
use crate::theme::PlotStyle;

pub const BOX_SIZE: i32 = 15;
/// Distance from a swatch's left edge to its label.
pub const TEXT_OFFSET: i32 = 20;
pub const ITEM_GAP: i32 = 5;

/// Measured legend items.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub item_widths: Vec<f32>,
    /// Sum of item widths minus the trailing gap; 0 when there are no items.
    pub total_width: f32,
}

impl LegendLayout {
    pub fn measure<S: AsRef<str>>(labels: &[S], painter: &dyn Painter) -> Self {
        let item_widths: Vec<f32> = labels
            .iter()
            .map(|l| (BOX_SIZE + TEXT_OFFSET + ITEM_GAP) as f32 + painter.text_width(l.as_ref()))
            .collect();
        let total_width = if item_widths.is_empty() {
            0.0
        } else {
            item_widths.iter().sum::<f32>() - ITEM_GAP as f32
        };
        Self { item_widths, total_width }
    }
}

/// Draw the legend in the strip `[band_bottom, band_bottom + strip]`.
/// The background goes first so later swatches and labels stay visible.
pub fn draw_legend<S: AsRef<str>>(
    painter: &mut dyn Painter,
    style: &PlotStyle,
    labels: &[S],
    band_bottom: i32,
    strip: i32,
) -> LegendLayout {
    let layout = LegendLayout::measure(labels, painter);
    let top = band_bottom + strip / 2 - TEXT_OFFSET / 2;

    let bg = RectI32::from_ltwh(-5, band_bottom, layout.total_width as i32 + 10, strip);
    painter.fill_rect(bg, style.legend_background);
    painter.stroke_rect(bg, &Pen::solid(style.frame, 1.0));

    let outline = Pen::solid(style.outline, 1.0);
    let mut x = 0.0f32;
    for (i, label) in labels.iter().enumerate() {
        let left = x as i32;
        let swatch = RectI32::from_ltwh(left, top, BOX_SIZE, BOX_SIZE);
        painter.fill_rect(swatch, style.series_color(i));
        painter.stroke_rect(swatch, &outline);
        painter.text(label.as_ref(), PointI32::new(left + TEXT_OFFSET, top + BOX_SIZE / 2 + 5), style.text);
        x += layout.item_widths[i];
    }
    layout
}
