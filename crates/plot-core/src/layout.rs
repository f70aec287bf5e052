// File: crates/plot-core/src/layout.rs
// Summary: Slot layout: one band per category (plus a spacer band at each end), split per series.

use crate::geometry::clamp;

/// Pixel centres for every (series, padded category) pair.
///
/// Padded index 0 and `padded_categories - 1` are spacer bands; real category `k`
/// lives at padded index `k + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotLayout {
    pub start: i32,
    pub extent: i32,
    pub gap: i32,
    pub padded_categories: usize,
    pub series: usize,
    /// Height (or width) of one category band.
    pub band_height: i32,
    /// Share of a band given to one series.
    pub slot_height: i32,
    /// `centers[series][padded_category]`
    centers: Vec<Vec<i32>>,
}

impl SlotLayout {
    pub fn compute(start: i32, extent: i32, categories: usize, series: usize, gap: i32) -> Self {
        let padded_categories = categories + 2;
        let padded = padded_categories as i32;
        let band_height = (extent - gap * (padded - 1)).div_euclid(padded);
        let slot_height = band_height.div_euclid(series.max(1) as i32);

        let lo = start;
        let hi = (start + extent - 1).max(lo);
        let centers = (0..series)
            .map(|i| {
                (0..padded_categories)
                    .map(|j| {
                        let band_start = j as i32 * (band_height + gap);
                        let c = start + band_start + i as i32 * slot_height + slot_height.div_euclid(2);
                        clamp(c, lo, hi)
                    })
                    .collect()
            })
            .collect();

        Self { start, extent, gap, padded_categories, series, band_height, slot_height, centers }
    }

    /// Centre of `series` within padded category `j`.
    pub fn center(&self, series: usize, j: usize) -> i32 {
        self.centers[series][j]
    }

    /// Padded indices of the real categories: `1..padded_categories - 1`.
    pub fn real_categories(&self) -> std::ops::Range<usize> {
        1..self.padded_categories - 1
    }

    /// Mean of all series centres in padded category `j`, truncated; `None` when there are no series.
    pub fn category_center(&self, j: usize) -> Option<i32> {
        if self.centers.is_empty() {
            return None;
        }
        let sum: f64 = self.centers.iter().map(|row| row[j] as f64).sum();
        Some((sum / self.centers.len() as f64) as i32)
    }

    /// Every computed centre, for bounds checks.
    pub fn centers(&self) -> impl Iterator<Item = i32> + '_ {
        self.centers.iter().flatten().copied()
    }
}
