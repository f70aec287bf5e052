// File: crates/plot-core/src/matrix.rs
// Summary: Value matrix [series][category] built by evaluating functions over the categories.

use log::{debug, warn};

use crate::error::PlotError;
use crate::expr::Expr;
use crate::range::RangeSpec;

/// Evaluated values, one row per series and one column per category.
/// `None` marks a cell whose result was not a real number.
/// Rows may be shorter than the category count; missing trailing cells are never drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueMatrix {
    rows: Vec<Vec<Option<f64>>>,
}

impl ValueMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Self {
        Self { rows }
    }

    /// Convenience for fully numeric rows.
    pub fn from_values(rows: Vec<Vec<f64>>) -> Self {
        Self { rows: rows.into_iter().map(|r| r.into_iter().map(Some).collect()).collect() }
    }

    /// Evaluate every function over every category.
    /// A function that does not parse contributes an empty row; non-finite results become `None`.
    pub fn evaluate<S: AsRef<str>>(functions: &[S], categories: &[f64]) -> Self {
        let rows = functions
            .iter()
            .enumerate()
            .map(|(i, f)| match Expr::parse(f.as_ref()) {
                Ok(expr) => categories
                    .iter()
                    .map(|&x| Some(expr.eval(x)).filter(|v| v.is_finite()))
                    .collect(),
                Err(e) => {
                    warn!("function {} ({:?}) skipped: {}", i, f.as_ref(), e);
                    Vec::new()
                }
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }

    pub fn series_count(&self) -> usize {
        self.rows.len()
    }

    /// At least one series has at least one cell, even a missing one.
    pub fn has_values(&self) -> bool {
        self.rows.iter().any(|row| !row.is_empty())
    }

    /// Numeric copy with every `None` or non-finite cell coerced to 0.0. Row lengths are kept.
    pub fn cleaned(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.filter(|v| v.is_finite()).unwrap_or(0.0))
                    .collect()
            })
            .collect()
    }
}

/// One "plot" action: parse the range, generate categories, evaluate all functions.
pub fn process<S: AsRef<str>>(functions: &[S], range_text: &str) -> Result<(Vec<f64>, ValueMatrix), PlotError> {
    let range = RangeSpec::parse(range_text)?;
    let categories = range.categories();
    let matrix = ValueMatrix::evaluate(functions, &categories);
    debug!(
        "processed {} function(s) over {} categor(ies) [{}, {}]",
        matrix.series_count(),
        categories.len(),
        range.start,
        range.end
    );
    Ok((categories, matrix))
}
