// File: crates/plot-core/src/inputs.rs
// Summary: Editable plot inputs: the function list, the example presets and the range text.

use log::debug;

use crate::error::{PlotError, RangeError};
use crate::matrix::{process, ValueMatrix};
use crate::range::{RangeSpec, DEFAULT_RANGE};

/// Examples offered next to every function input.
pub const EXAMPLE_FUNCTIONS: [&str; 2] = ["10 * sin(x)", "10 * sin(2*x + exp(cos(abs(x))))"];

/// What the next plot action reads: one text per series plus the range descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotInputs {
    functions: Vec<String>,
    range: String,
}

impl Default for PlotInputs {
    fn default() -> Self {
        Self { functions: vec![EXAMPLE_FUNCTIONS[0].to_string()], range: DEFAULT_RANGE.to_string() }
    }
}

impl PlotInputs {
    /// An empty function list starts with the first example, like a fresh input form.
    pub fn new(functions: Vec<String>, range: impl Into<String>) -> Self {
        let functions = if functions.is_empty() { vec![EXAMPLE_FUNCTIONS[0].to_string()] } else { functions };
        Self { functions, range: range.into() }
    }

    pub fn functions(&self) -> &[String] {
        &self.functions
    }

    pub fn range(&self) -> &str {
        &self.range
    }

    pub fn set_range(&mut self, range: impl Into<String>) {
        self.range = range.into();
    }

    pub fn add_function(&mut self, text: impl Into<String>) {
        self.functions.push(text.into());
    }

    /// Remove the input at `index`; out-of-range indices are ignored.
    pub fn remove_function(&mut self, index: usize) -> Option<String> {
        (index < self.functions.len()).then(|| self.functions.remove(index))
    }

    /// Replace input `index` with the example after its current text, or the first
    /// example if it holds none. Returns the new text.
    pub fn cycle_example(&mut self, index: usize) -> Option<&str> {
        let slot = self.functions.get_mut(index)?;
        let next = EXAMPLE_FUNCTIONS
            .iter()
            .position(|e| *e == slot.as_str())
            .map_or(0, |i| (i + 1) % EXAMPLE_FUNCTIONS.len());
        *slot = EXAMPLE_FUNCTIONS[next].to_string();
        debug!("input {index} set to example {next}");
        Some(slot.as_str())
    }

    /// Change the range's point count by `delta`, saturating at zero.
    pub fn adjust_count(&mut self, delta: i64) -> Result<usize, RangeError> {
        let mut spec = RangeSpec::parse(&self.range)?;
        spec.count = (spec.count as i64 + delta).max(0) as usize;
        self.range = spec.to_string();
        Ok(spec.count)
    }

    /// Run the plot action over the current inputs.
    pub fn process(&self) -> Result<(Vec<f64>, ValueMatrix), PlotError> {
        process(&self.functions, &self.range)
    }
}
