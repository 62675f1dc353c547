//! Simplification rules for expressions involving addition.

use crate::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use binexp_parser::parser::ast::{binary::BinOpKind, expr::Expr};
use num_traits::Zero;

/// `0+a = a`
/// `a+0 = a`
///
/// The left operand is checked first, so `+ 0 0` splices in the right-hand zero.
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if lhs.as_integer().map(|n| n.is_zero()).unwrap_or(false) {
            Some(rhs.clone())
        } else if rhs.as_integer().map(|n| n.is_zero()).unwrap_or(false) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
}
