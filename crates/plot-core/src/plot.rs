// File: crates/plot-core/src/plot.rs
// Summary: Chart variants, their shared draw-pass interface and the factory that picks one.

use log::{debug, warn};

use crate::matrix::ValueMatrix;
use crate::painter::Painter;
use crate::rectangle::RectanglePlot;
use crate::scale::ScaleRange;
use crate::theme::PlotStyle;
use crate::triangle::TrianglePlot;
use crate::types::Margins;

/// Which renderer draws the data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlotKind {
    /// Horizontal pseudo-3D blocks.
    #[default]
    Rectangle,
    /// Vertical triangle histogram.
    Triangle,
}

impl PlotKind {
    pub const ALL: [PlotKind; 2] = [PlotKind::Rectangle, PlotKind::Triangle];

    /// Resolve a selector string. Unknown names draw blocks.
    pub fn from_name(name: &str) -> Self {
        let n = name.trim();
        if n.eq_ignore_ascii_case("triangle") || n.eq_ignore_ascii_case("gistogram triangle") {
            PlotKind::Triangle
        } else {
            PlotKind::Rectangle
        }
    }

    /// Label shown by the chart-type selector.
    pub fn label(self) -> &'static str {
        match self {
            PlotKind::Rectangle => "Linear rectangle",
            PlotKind::Triangle => "Gistogram triangle",
        }
    }

    /// The other variant, for toggling.
    pub fn next(self) -> Self {
        match self {
            PlotKind::Rectangle => PlotKind::Triangle,
            PlotKind::Triangle => PlotKind::Rectangle,
        }
    }
}

/// Everything one plot action produced.
#[derive(Clone, Debug, Default)]
pub struct PlotData {
    pub kind: PlotKind,
    pub categories: Vec<f64>,
    pub matrix: ValueMatrix,
    /// One label per series: the function's source text.
    pub labels: Vec<String>,
}

/// Draw passes every variant answers to. The caller always runs them in order:
/// grid, plot, zero line. Variants without a separate grid or zero-line pass keep the no-op.
pub trait PlotPasses {
    fn draw_grid(&self, _painter: &mut dyn Painter, _style: &PlotStyle) {}
    fn draw_plot(&self, painter: &mut dyn Painter, style: &PlotStyle);
    fn draw_zero_line(&self, _painter: &mut dyn Painter, _style: &PlotStyle) {}
}

/// Pixel band the data is drawn into: `[left, right] x [0, bottom]`, legend strip below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotFrame {
    pub margins: Margins,
    pub width: i32,
    pub height: i32,
}

impl PlotFrame {
    pub fn new(widget_width: i32, widget_height: i32, margins: Margins) -> Self {
        Self {
            margins,
            width: (widget_width - margins.hsum()).max(0),
            height: (widget_height - margins.bottom).max(0),
        }
    }
    pub fn left(&self) -> i32 { self.margins.start }
    pub fn right(&self) -> i32 { self.margins.start + self.width }
    pub fn bottom(&self) -> i32 { self.height }
}

/// Validated and cleaned inputs shared by every variant.
#[derive(Clone, Debug)]
pub struct Prepared {
    pub categories: Vec<f64>,
    pub labels: Vec<String>,
    /// `values[series][category]`, non-numeric cells already zeroed; rows may be short.
    pub values: Vec<Vec<f64>>,
    pub range: ScaleRange,
}

impl Prepared {
    /// `None` when there is nothing to plot: no categories, or no series with any value.
    pub fn new(data: &PlotData) -> Option<Self> {
        if data.categories.is_empty() || !data.matrix.has_values() {
            warn!(
                "nothing to plot: {} categor(ies), {} series, none with values",
                data.categories.len(),
                data.matrix.series_count()
            );
            return None;
        }
        let values = data.matrix.cleaned();
        let flat: Vec<f64> = values.iter().flatten().copied().collect();
        let range = ScaleRange::from_values(&flat);
        debug!(
            "scale range [{:.4}, {:.4}] from data [{:.4}, {:.4}]",
            range.min_val, range.max_val, range.data_min, range.data_max
        );
        Some(Self {
            categories: data.categories.clone(),
            labels: data.labels.clone(),
            values,
            range,
        })
    }

    /// `(category, series, value)` for every defined cell, category-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.categories.len()).flat_map(move |j| {
            self.values
                .iter()
                .enumerate()
                .filter_map(move |(i, row)| row.get(j).map(|&v| (j, i, v)))
        })
    }
}

/// The closed set of chart variants.
pub enum Plot {
    Rectangle(RectanglePlot),
    Triangle(TrianglePlot),
}

impl Plot {
    /// Build the variant `data.kind` names for a widget of `width` x `height`.
    pub fn build(data: &PlotData, width: i32, height: i32) -> Self {
        let frame = PlotFrame::new(width, height, Margins::default());
        match data.kind {
            PlotKind::Rectangle => Plot::Rectangle(RectanglePlot::new(data, frame)),
            PlotKind::Triangle => Plot::Triangle(TrianglePlot::new(data, frame)),
        }
    }

    fn passes(&self) -> &dyn PlotPasses {
        match self {
            Plot::Rectangle(p) => p,
            Plot::Triangle(p) => p,
        }
    }

    /// Run grid, plot and zero-line passes in that order.
    pub fn render(&self, painter: &mut dyn Painter, style: &PlotStyle) {
        let passes = self.passes();
        passes.draw_grid(painter, style);
        passes.draw_plot(painter, style);
        passes.draw_zero_line(painter, style);
    }
}
