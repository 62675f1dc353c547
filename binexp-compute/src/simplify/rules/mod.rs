//! Implementation of the rewrite rules.
//!
//! Each infallible rule in this module is a function that takes the expression to simplify as an
//! argument, and returns `Some(expr)` with the rewritten expression if the rule applies, or
//! `None` if the rule does not apply. Constant folding can additionally fail, so it (and
//! therefore [`all`]) returns `Result` around the same option.

pub mod add;
pub mod fold;
pub mod multiply;

use crate::step_collector::StepCollector;
use binexp_parser::parser::ast::{binary::BinOpKind, expr::Expr};
use super::{Error, step::Step};

/// If the expression is a binary operation with the given operator, calls the given
/// transformation function with its two operands.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    kind: BinOpKind,
    f: impl FnOnce(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Binary(binary) = expr {
        if binary.op.kind == kind {
            return f(&binary.lhs, &binary.rhs);
        }
    }

    None
}

/// Applies all rules, in order: additive identity, multiplicative identity, multiplication by
/// zero, constant folding. Each rule decides for itself whether it applies; no rule assumes an
/// earlier rule fired.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    if let Some(reduced) = add::all(expr, step_collector) {
        return Ok(Some(reduced));
    }
    if let Some(reduced) = multiply::all(expr, step_collector) {
        return Ok(Some(reduced));
    }
    fold::all(expr, step_collector)
}
