// File: crates/plot-core/src/expr.rs
// Summary: Functions of x compiled through meval, with numpy/math module prefixes accepted.

use std::fmt;

use meval::FuncEvalError;

use crate::error::{ExprError, ExprResult};

const MODULE_PREFIXES: [&str; 3] = ["numpy.", "np.", "math."];

/// A parsed function of `x`. Names and arities are checked once, at parse time.
pub struct Expr {
    source: String,
    func: Box<dyn Fn(f64) -> f64>,
}

impl Expr {
    pub fn parse(source: &str) -> ExprResult<Self> {
        let normalized = normalize(source);
        let parsed: meval::Expr = normalized.parse().map_err(to_expr_error)?;
        let func = parsed.bind_with_context(context(), "x").map_err(to_expr_error)?;
        Ok(Self { source: source.to_string(), func: Box::new(func) })
    }

    /// Value at `x`. Domain violations come back as NaN or infinity.
    pub fn eval(&self, x: f64) -> f64 {
        (self.func)(x)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Expr").field(&self.source).finish()
    }
}

/// meval builtins plus the numpy spellings users type.
fn context() -> meval::Context<'static> {
    let mut ctx = meval::Context::new();
    ctx.var("tau", std::f64::consts::TAU)
        .func("log", f64::ln)
        .func("log10", f64::log10)
        .func("log2", f64::log2)
        .func("fabs", f64::abs)
        .func("arcsin", f64::asin)
        .func("arccos", f64::acos)
        .func("arctan", f64::atan)
        .func("sign", |v: f64| if v == 0.0 { 0.0 } else { v.signum() })
        .func2("pow", f64::powf)
        .func2("power", f64::powf)
        .func2("arctan2", f64::atan2);
    ctx
}

/// Drop `np.`/`numpy.`/`math.` in front of names and read `**` as `^`.
fn normalize(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(c) = rest.chars().next() {
        let word_start = !out
            .chars()
            .next_back()
            .is_some_and(|p| p.is_ascii_alphanumeric() || p == '_' || p == '.');
        if word_start {
            if let Some(tail) = MODULE_PREFIXES.iter().find_map(|p| rest.strip_prefix(p)) {
                rest = tail;
                continue;
            }
        }
        if let Some(tail) = rest.strip_prefix("**") {
            out.push('^');
            rest = tail;
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

fn to_expr_error(e: meval::Error) -> ExprError {
    let message = e.to_string();
    match e {
        meval::Error::UnknownVariable(_) => ExprError::name(message),
        meval::Error::Function(_, FuncEvalError::UnknownFunction) => ExprError::name(message),
        meval::Error::Function(..) => ExprError::arity(message),
        _ => ExprError::parse(message),
    }
}
