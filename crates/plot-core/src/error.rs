// File: crates/plot-core/src/error.rs
// Summary: Typed errors for range parsing, expression parsing and the plot input pipeline.

use thiserror::Error;

/// Failure to turn a `"start,end,count"` descriptor into categories.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("expected `start,end,count`, got {0} field(s)")]
    FieldCount(usize),
    #[error("range {field} is not a number: {text:?}")]
    NotANumber { field: &'static str, text: String },
    #[error("range {field} must be finite")]
    NotFinite { field: &'static str },
    #[error("range count must be a non-negative integer, got {0:?}")]
    BadCount(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprErrorKind {
    Parse,
    Name,
    Arity,
}

/// A function text that cannot be turned into a function of `x`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?} error: {message}")]
pub struct ExprError {
    pub kind: ExprErrorKind,
    pub message: String,
}

impl ExprError {
    pub fn new(kind: ExprErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn parse(message: impl Into<String>) -> Self { Self::new(ExprErrorKind::Parse, message) }
    pub fn name(message: impl Into<String>) -> Self { Self::new(ExprErrorKind::Name, message) }
    pub fn arity(message: impl Into<String>) -> Self { Self::new(ExprErrorKind::Arity, message) }
}

/// Errors surfaced by the plot action before anything is drawn.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error(transparent)]
    Range(#[from] RangeError),
}

pub type ExprResult<T> = Result<T, ExprError>;
