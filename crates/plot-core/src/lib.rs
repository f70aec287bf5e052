// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports function evaluation, block chart layout and rendering.

pub mod chart;
pub mod error;
pub mod expr;
pub mod geometry;
pub mod inputs;
pub mod layout;
pub mod legend;
pub mod matrix;
pub mod painter;
pub mod plot;
pub mod range;
pub mod rectangle;
pub mod scale;
pub mod text;
pub mod theme;
pub mod triangle;
pub mod types;

pub use chart::{ChartDisplay, RenderOptions};
pub use error::{ExprError, PlotError, RangeError};
pub use expr::Expr;
pub use inputs::{PlotInputs, EXAMPLE_FUNCTIONS};
pub use layout::SlotLayout;
pub use matrix::{process, ValueMatrix};
pub use painter::{Painter, RecordingPainter, SkiaPainter};
pub use plot::{Plot, PlotData, PlotKind, PlotPasses};
pub use range::RangeSpec;
pub use scale::{ScaleRange, ValueMapper};
pub use text::TextShaper;
pub use theme::PlotStyle;
