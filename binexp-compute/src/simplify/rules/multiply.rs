//! Simplification rules for expressions involving multiplication.

use crate::{
    simplify::{rules::do_binary, step::Step},
    step_collector::StepCollector,
};
use binexp_parser::parser::ast::{
    binary::BinOpKind,
    expr::Expr,
    literal::{LitInt, Literal},
};
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// `1*a = a`
/// `a*1 = a`
///
/// The surviving operand is spliced in whole, so the rule holds when that operand is itself a
/// subexpression and not just a leaf.
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if lhs.as_integer().map(|n| n.is_one()).unwrap_or(false) {
            Some(rhs.clone())
        } else if rhs.as_integer().map(|n| n.is_one()).unwrap_or(false) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let span = expr.span();
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        let either_zero = [lhs, rhs].into_iter()
            .any(|operand| operand.as_integer().map(|n| n.is_zero()).unwrap_or(false));

        if either_zero {
            // both operands are dropped; the zero takes the span of the whole product
            Some(Expr::Literal(Literal::Integer(LitInt {
                value: BigInt::zero(),
                span,
            })))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_one(expr, step_collector)
        .or_else(|| multiply_zero(expr, step_collector))
}
