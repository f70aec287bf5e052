// File: crates/plot-core/src/rectangle.rs
// Summary: Horizontal pseudo-3D block chart: values along X, categories stacked down Y.

use log::{debug, trace};
use skia_safe as skia;

use crate::geometry::{PointI32, RectI32};
use crate::layout::SlotLayout;
use crate::legend::draw_legend;
use crate::painter::{Painter, Pen};
use crate::plot::{PlotData, PlotFrame, PlotPasses, Prepared};
use crate::scale::ValueMapper;
use crate::theme::{darker, lighter, PlotStyle};
use crate::types::{BLOCK_DEPTH, BLOCK_INSET, GAP};

/// One drawn block: a front rectangle from `x_start` to `x_end`, centred on `y_center`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub series: usize,
    pub category: usize,
    pub y_center: i32,
    pub x_start: i32,
    pub x_end: i32,
    pub height: i32,
}

impl Block {
    pub fn front(&self) -> RectI32 {
        let half = self.height.div_euclid(2);
        RectI32::from_ltrb(self.x_start, self.y_center - half, self.x_end, self.y_center + half)
    }

    /// Top face: front top edge and the same edge pushed back by `depth`.
    pub fn top_face(&self, depth: i32) -> [PointI32; 4] {
        let [tl, tr, _, _] = self.front().corners();
        [tl, tr, tr.offset(depth, -depth), tl.offset(depth, -depth)]
    }

    /// Right face: front right edge and the same edge pushed back by `depth`.
    pub fn side_face(&self, depth: i32) -> [PointI32; 4] {
        let [_, tr, br, _] = self.front().corners();
        [tr, br, br.offset(depth, -depth), tr.offset(depth, -depth)]
    }
}

/// Draw a beveled solid: side and top faces shaded from `color`, then the front face on top.
pub fn draw_block(painter: &mut dyn Painter, block: &Block, color: skia::Color, outline: &Pen) {
    let side = block.side_face(BLOCK_DEPTH);
    painter.fill_polygon(&side, darker(color, 140));
    painter.stroke_polygon(&side, outline);

    let top = block.top_face(BLOCK_DEPTH);
    painter.fill_polygon(&top, lighter(color, 130));
    painter.stroke_polygon(&top, outline);

    let front = block.front().corners();
    painter.fill_polygon(&front, color);
    painter.stroke_polygon(&front, outline);
}

pub struct RectanglePlot {
    frame: PlotFrame,
    prepared: Option<Prepared>,
    mapper: Option<ValueMapper>,
    layout: Option<SlotLayout>,
}

impl RectanglePlot {
    pub fn new(data: &PlotData, frame: PlotFrame) -> Self {
        let prepared = Prepared::new(data);
        let mapper = prepared
            .as_ref()
            .map(|p| ValueMapper::new(p.range, frame.left(), frame.width));
        let layout = prepared.as_ref().map(|p| {
            SlotLayout::compute(frame.left(), frame.height, p.categories.len(), p.values.len(), GAP)
        });
        if let Some(l) = &layout {
            debug!(
                "block layout: {} padded categories, band {}px, slot {}px",
                l.padded_categories, l.band_height, l.slot_height
            );
        }
        Self { frame, prepared, mapper, layout }
    }

    pub fn is_valid(&self) -> bool {
        self.prepared.is_some()
    }

    pub fn mapper(&self) -> Option<&ValueMapper> {
        self.mapper.as_ref()
    }

    /// Geometry of every block the plot pass draws, category-major.
    /// Zero-width blocks and cells past the end of a short series are left out.
    pub fn blocks(&self) -> Vec<Block> {
        let (Some(p), Some(mapper), Some(layout)) = (&self.prepared, &self.mapper, &self.layout) else {
            return Vec::new();
        };
        let zero_x = mapper.zero_px();
        let height = (layout.slot_height - BLOCK_INSET).max(0);
        p.cells()
            .filter_map(|(j_real, i, value)| {
                let x_val = mapper.to_px(value);
                let x_start = zero_x.min(x_val);
                let x_end = zero_x.max(x_val);
                if x_start == x_end {
                    return None;
                }
                Some(Block {
                    series: i,
                    category: j_real,
                    y_center: layout.center(i, j_real + 1),
                    x_start: x_start.max(self.frame.left()),
                    x_end: x_end.min(self.frame.right()),
                    height,
                })
            })
            .collect()
    }
}

impl PlotPasses for RectanglePlot {
    fn draw_grid(&self, painter: &mut dyn Painter, style: &PlotStyle) {
        let (Some(p), Some(mapper), Some(layout)) = (&self.prepared, &self.mapper, &self.layout) else {
            return;
        };
        let pen = Pen::dashed(style.grid, style.grid_width);
        let (left, right, bottom) = (self.frame.left(), self.frame.right(), self.frame.bottom());

        // value ticks, mirrored below zero
        for val in p.range.tick_values() {
            let x = mapper.to_px(val);
            painter.line(PointI32::new(x, 0), PointI32::new(x, bottom), &pen);
            painter.text(&format!("{val:.3}"), PointI32::new(x + 2, bottom - 5), style.grid);
            if val != 0.0 {
                let x_neg = mapper.to_px(-val);
                painter.line(PointI32::new(x_neg, 0), PointI32::new(x_neg, bottom), &pen);
                painter.text(&format!("-{val:.3}"), PointI32::new(x_neg + 2, bottom - 5), style.grid);
            }
        }

        // one line per real category through the mean of its series centres
        let category_pen = Pen::solid(style.grid, style.grid_width);
        for j in layout.real_categories() {
            let Some(y) = layout.category_center(j) else { continue };
            painter.line(PointI32::new(left, y), PointI32::new(right, y), &category_pen);
            if let Some(cat) = p.categories.get(j - 1) {
                painter.text(&format!("{cat:.2}"), PointI32::new(5, y + 5), style.grid);
            }
        }

        let c = RectI32::from_ltrb(left, 0, right, bottom).corners();
        for k in 0..c.len() {
            painter.line(c[k], c[(k + 1) % c.len()], &pen);
        }
    }

    fn draw_plot(&self, painter: &mut dyn Painter, style: &PlotStyle) {
        let Some(p) = &self.prepared else { return };
        let outline = Pen::solid(style.outline, 1.0);
        for block in self.blocks() {
            trace!(
                "block s{} c{}: x {}..{} y {}",
                block.series,
                block.category,
                block.x_start,
                block.x_end,
                block.y_center
            );
            draw_block(painter, &block, style.series_color(block.series), &outline);
        }
        draw_legend(painter, style, &p.labels, self.frame.bottom(), self.frame.margins.bottom);
    }

    fn draw_zero_line(&self, painter: &mut dyn Painter, style: &PlotStyle) {
        let Some(mapper) = &self.mapper else { return };
        let zero_x = mapper.zero_px();
        let pen = Pen::solid(style.zero_line, style.grid_width + 1.0);
        painter.line(PointI32::new(zero_x, 0), PointI32::new(zero_x, self.frame.bottom()), &pen);
    }
}
