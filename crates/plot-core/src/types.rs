// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, block geometry).

/// Default surface width in pixels.
pub const WIDTH: i32 = 600;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Vertical gap between category rows, in pixels.
pub const GAP: i32 = 20;
/// Diagonal offset of the top/side faces of a block.
pub const BLOCK_DEPTH: i32 = 8;
/// Amount shaved off a slot to leave air between adjacent series.
pub const BLOCK_INSET: i32 = 4;

/// Screen margins around the plotting band, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margins {
    /// Left margin; also the first pixel of the value axis and of the slot layout.
    pub start: i32,
    /// Right margin.
    pub end: i32,
    /// Strip below the band reserved for value labels and the legend.
    pub bottom: i32,
}

impl Margins {
    pub const fn new(start: u32, end: u32, bottom: u32) -> Self {
        Self { start: start as i32, end: end as i32, bottom: bottom as i32 }
    }
    /// Total horizontal margin (start + end).
    pub const fn hsum(&self) -> i32 { self.start + self.end }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(50, 15, 50)
    }
}
