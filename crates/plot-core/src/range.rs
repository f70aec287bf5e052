// File: crates/plot-core/src/range.rs
// Summary: Range descriptor parsing and category generation.

use crate::error::RangeError;
use crate::geometry::linspace;

/// Range text the app starts with.
pub const DEFAULT_RANGE: &str = "1,10,7";

/// `count` categories evenly spaced from `start` to `end` inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSpec {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl RangeSpec {
    pub fn new(start: f64, end: f64, count: usize) -> Self {
        Self { start, end, count }
    }

    /// Parse `"start,end,count"`, e.g. `"1,10,7"`.
    pub fn parse(text: &str) -> Result<Self, RangeError> {
        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(RangeError::FieldCount(fields.len()));
        }
        let start = parse_bound("start", fields[0])?;
        let end = parse_bound("end", fields[1])?;
        let count = fields[2]
            .parse::<usize>()
            .map_err(|_| RangeError::BadCount(fields[2].to_string()))?;
        Ok(Self { start, end, count })
    }

    /// Category values, one per x-axis anchor.
    pub fn categories(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.count)
    }
}

impl std::str::FromStr for RangeSpec {
    type Err = RangeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl std::fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.start, self.end, self.count)
    }
}

fn parse_bound(field: &'static str, text: &str) -> Result<f64, RangeError> {
    let v = text
        .parse::<f64>()
        .map_err(|_| RangeError::NotANumber { field, text: text.to_string() })?;
    if !v.is_finite() {
        return Err(RangeError::NotFinite { field });
    }
    Ok(v)
}
