// File: crates/plot-core/src/scale.rs
// Summary: Percentile-clipped, zero-straddling value range and the value-to-pixel mapper.

/// Lower/upper percentiles used to clip outliers.
pub const LOW_PERCENTILE: f64 = 5.0;
pub const HIGH_PERCENTILE: f64 = 95.0;
/// Padding added on each side, as a fraction of the percentile span.
pub const PADDING_FRACTION: f64 = 0.3;
/// Number of tick steps between zero and the largest magnitude.
pub const TICK_DIVISIONS: usize = 4;

/// Percentile `p` (0..=100) of `values` with linear interpolation between closest ranks.
/// Returns 0.0 for empty input.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Display range used for pixel mapping.
/// Contract: `min_val <= 0.0 <= max_val` after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRange {
    pub min_val: f64,
    pub max_val: f64,
    /// Raw data extremes, before clipping and padding.
    pub data_min: f64,
    pub data_max: f64,
}

impl ScaleRange {
    pub fn from_values(values: &[f64]) -> Self {
        let zero = [0.0];
        let values = if values.is_empty() { &zero[..] } else { values };

        let lower = percentile(values, LOW_PERCENTILE);
        let upper = percentile(values, HIGH_PERCENTILE);
        let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let span = upper - lower;
        let padding = if span != 0.0 { span * PADDING_FRACTION } else { 1.0 };
        let mut min_val = lower - padding;
        let mut max_val = upper + padding;
        if min_val > 0.0 {
            min_val = -padding;
        }
        if max_val < 0.0 {
            max_val = padding;
        }
        Self { min_val, max_val, data_min, data_max }
    }

    pub fn span(&self) -> f64 {
        self.max_val - self.min_val
    }

    /// Tick spacing sized from the raw data magnitude, not from the padded range.
    pub fn tick_step(&self) -> f64 {
        let mut magnitude = self.data_min.abs().max(self.data_max);
        if magnitude == 0.0 {
            magnitude = if self.max_val != 0.0 { self.max_val } else { 1.0 };
        }
        magnitude / TICK_DIVISIONS as f64
    }

    /// Non-negative tick values `0, step, .., 4 * step`. Callers mirror them below zero.
    pub fn tick_values(&self) -> Vec<f64> {
        let step = self.tick_step();
        (0..=TICK_DIVISIONS).map(|k| k as f64 * step).collect()
    }
}

/// Linear value-to-pixel transform over `[start, start + length]`.
/// `inverted` maps `max_val` to `start`, for axes that grow upward on screen.
#[derive(Clone, Copy, Debug)]
pub struct ValueMapper {
    pub range: ScaleRange,
    pub start: i32,
    pub length: i32,
    pub inverted: bool,
}

impl ValueMapper {
    pub fn new(range: ScaleRange, start: i32, length: i32) -> Self {
        Self { range, start, length: length.max(0), inverted: false }
    }

    pub fn new_inverted(range: ScaleRange, start: i32, length: i32) -> Self {
        Self { range, start, length: length.max(0), inverted: true }
    }

    pub fn end(&self) -> i32 {
        self.start + self.length
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> i32 {
        let span = self.range.span();
        let denom = if span != 0.0 { span } else { 1.0 };
        let mut rel = (value - self.range.min_val) / denom;
        if self.inverted {
            rel = 1.0 - rel;
        }
        let px = (self.start as f64 + rel * self.length as f64) as i32;
        px.clamp(self.start, self.end())
    }

    /// Pixel of the zero value; the baseline every block and the zero-line pass share.
    pub fn zero_px(&self) -> i32 {
        self.to_px(0.0)
    }
}
