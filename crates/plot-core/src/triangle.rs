// File: crates/plot-core/src/triangle.rs
// Summary: Vertical triangle histogram: categories along X, values up Y, one triangle per cell.

use log::debug;

use crate::geometry::{PointI32, RectI32};
use crate::layout::SlotLayout;
use crate::legend::draw_legend;
use crate::painter::{Painter, Pen};
use crate::plot::{PlotData, PlotFrame, PlotPasses, Prepared};
use crate::scale::ValueMapper;
use crate::theme::PlotStyle;
use crate::types::{BLOCK_INSET, GAP};

/// Triangle with its base on the zero line and its apex at the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spike {
    pub series: usize,
    pub category: usize,
    pub x_center: i32,
    pub half_width: i32,
    pub base_y: i32,
    pub apex_y: i32,
}

impl Spike {
    pub fn points(&self) -> [PointI32; 3] {
        [
            PointI32::new(self.x_center - self.half_width, self.base_y),
            PointI32::new(self.x_center + self.half_width, self.base_y),
            PointI32::new(self.x_center, self.apex_y),
        ]
    }
}

pub struct TrianglePlot {
    frame: PlotFrame,
    prepared: Option<Prepared>,
    mapper: Option<ValueMapper>,
    layout: Option<SlotLayout>,
}

impl TrianglePlot {
    pub fn new(data: &PlotData, frame: PlotFrame) -> Self {
        let prepared = Prepared::new(data);
        let mapper = prepared
            .as_ref()
            .map(|p| ValueMapper::new_inverted(p.range, 0, frame.height));
        let layout = prepared.as_ref().map(|p| {
            SlotLayout::compute(frame.left(), frame.width, p.categories.len(), p.values.len(), GAP)
        });
        if let Some(l) = &layout {
            debug!("triangle layout: band {}px, slot {}px", l.band_height, l.slot_height);
        }
        Self { frame, prepared, mapper, layout }
    }

    pub fn is_valid(&self) -> bool {
        self.prepared.is_some()
    }

    pub fn spikes(&self) -> Vec<Spike> {
        let (Some(p), Some(mapper), Some(layout)) = (&self.prepared, &self.mapper, &self.layout) else {
            return Vec::new();
        };
        let base_y = mapper.zero_px();
        let half_width = ((layout.slot_height - BLOCK_INSET) / 2).max(0);
        p.cells()
            .filter_map(|(j_real, i, value)| {
                let apex_y = mapper.to_px(value);
                (apex_y != base_y).then(|| Spike {
                    series: i,
                    category: j_real,
                    x_center: layout.center(i, j_real + 1),
                    half_width,
                    base_y,
                    apex_y,
                })
            })
            .collect()
    }
}

impl PlotPasses for TrianglePlot {
    /// Grid for the vertical orientation; the zero line is part of it.
    fn draw_grid(&self, painter: &mut dyn Painter, style: &PlotStyle) {
        let (Some(p), Some(mapper), Some(layout)) = (&self.prepared, &self.mapper, &self.layout) else {
            return;
        };
        let pen = Pen::dashed(style.grid, style.grid_width);
        let (left, right, bottom) = (self.frame.left(), self.frame.right(), self.frame.bottom());

        for val in p.range.tick_values().into_iter().filter(|v| *v != 0.0) {
            for (v, label) in [(val, format!("{val:.3}")), (-val, format!("-{val:.3}"))] {
                let y = mapper.to_px(v);
                painter.line(PointI32::new(left, y), PointI32::new(right, y), &pen);
                painter.text(&label, PointI32::new(5, y + 4), style.grid);
            }
        }

        for j in layout.real_categories() {
            let Some(x) = layout.category_center(j) else { continue };
            painter.line(PointI32::new(x, 0), PointI32::new(x, bottom), &pen);
            if let Some(cat) = p.categories.get(j - 1) {
                painter.text(&format!("{cat:.2}"), PointI32::new(x + 2, bottom - 5), style.grid);
            }
        }

        let zero_y = mapper.zero_px();
        painter.line(
            PointI32::new(left, zero_y),
            PointI32::new(right, zero_y),
            &Pen::solid(style.zero_line, style.grid_width + 1.0),
        );
        painter.stroke_rect(RectI32::from_ltrb(left, 0, right, bottom), &pen);
    }

    fn draw_plot(&self, painter: &mut dyn Painter, style: &PlotStyle) {
        let Some(p) = &self.prepared else { return };
        let outline = Pen::solid(style.outline, 1.0);
        for spike in self.spikes() {
            let pts = spike.points();
            painter.fill_polygon(&pts, style.series_color(spike.series));
            painter.stroke_polygon(&pts, &outline);
        }
        draw_legend(painter, style, &p.labels, self.frame.bottom(), self.frame.margins.bottom);
    }
}
