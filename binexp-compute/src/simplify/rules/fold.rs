//! Constant folding: evaluating an operation whose operands are both integer literals.

use crate::{
    error::{kind, Error},
    simplify::step::Step,
    step_collector::StepCollector,
};
use binexp_parser::parser::ast::{
    binary::BinOpKind,
    expr::Expr,
    literal::{LitInt, Literal},
};
use num_traits::Zero;

/// `1+2 = 3`
/// `x+2 = x+2`
///
/// Folding requires both operands to be integer literals; a symbol operand leaves the node
/// untouched. Two cases of division are special:
///
/// - `n/0` fails with [`kind::DivisionByZero`] instead of folding, so an undefined expression is
///   never quietly turned into a number.
/// - An inexact quotient such as `7/2` is left unfolded, since truncating it would change the
///   value of the expression.
pub fn constant_fold(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let Expr::Binary(binary) = expr else {
        return Ok(None);
    };
    let (Some(lhs), Some(rhs)) = (binary.lhs.as_integer(), binary.rhs.as_integer()) else {
        return Ok(None);
    };

    let value = match binary.op.kind {
        BinOpKind::Add => lhs + rhs,
        BinOpKind::Sub => lhs - rhs,
        BinOpKind::Mul => lhs * rhs,
        BinOpKind::Div => {
            if rhs.is_zero() {
                return Err(Error::new(vec![binary.span()], kind::DivisionByZero));
            }
            if !(lhs % rhs).is_zero() {
                return Ok(None);
            }
            lhs / rhs
        },
    };

    step_collector.push(Step::ConstantFold);
    Ok(Some(Expr::Literal(Literal::Integer(LitInt {
        value,
        span: binary.span(),
    }))))
}

/// Applies all constant-folding rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    constant_fold(expr, step_collector)
}
