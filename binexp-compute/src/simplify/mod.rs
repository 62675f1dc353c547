//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which attempts to reduce the complexity of an
//! expression by repeatedly applying the rewrite rules in [`rules`] until no more rules apply.
//!
//! At each node, the rules are tried first against the node itself, and the simplifier then
//! recurses into the node's children. Whenever a pass changes anything, the node is visited
//! again, so a reduction exposed at a parent by the rewrite of a child (for example, a
//! multiplication by zero collapsing one operand of an addition) is picked up on a later pass.
//! The returned expression is a fixpoint of the rule set, which also makes [`simplify`]
//! idempotent.

pub mod rules;
pub mod step;

use crate::{error::Error, step_collector::StepCollector};
use binexp_parser::parser::ast::expr::Expr;
use step::Step;

/// Base implementation of the simplification algorithm.
fn inner_simplify(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<(Expr, bool), Error> {
    let mut expr = expr.clone();
    let mut changed_at_least_once = false;

    loop {
        let mut changed_in_this_pass = false;

        // try to simplify this expression using all rules
        if let Some(new_expr) = rules::all(&expr, step_collector)? {
            expr = new_expr;
            changed_in_this_pass = true;
            changed_at_least_once = true;
        }

        // then begin recursing into the expression's children
        match expr {
            Expr::Literal(literal) => return Ok((Expr::Literal(literal), changed_at_least_once)),
            Expr::Binary(ref mut binary) => {
                let result_l = inner_simplify(&binary.lhs, step_collector)?;
                let result_r = inner_simplify(&binary.rhs, step_collector)?;

                *binary.lhs = result_l.0;
                *binary.rhs = result_r.0;
                // use |= instead of = to not reset these variables to false if already true
                changed_in_this_pass |= result_l.1 || result_r.1;
                changed_at_least_once |= result_l.1 || result_r.1;
            },
        }

        if !changed_in_this_pass {
            break;
        }
    }

    Ok((expr, changed_at_least_once))
}

/// Simplify the given expression.
///
/// The only error that simplification itself can produce is
/// [`DivisionByZero`](crate::error::kind::DivisionByZero), raised when constant folding reaches a
/// division whose divisor is the constant zero.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    Ok(inner_simplify(expr, &mut ())?.0)
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, which is useful for debugging and for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps)?.0;
    Ok((expr, steps))
}

#[cfg(test)]
mod tests {
    use binexp_error::ErrorKind as _;
    use binexp_parser::parser::{ast::expr::Expr, fmt::Prefix, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses the input, simplifies it, and renders the result in prefix notation.
    fn simplify_str(input: &str) -> String {
        let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
        simplify(&expr).unwrap().as_prefix().to_string()
    }

    #[test]
    fn additive_identity() {
        assert_eq!(simplify_str("+ 1 0"), "1");
        assert_eq!(simplify_str("+ 0 x"), "x");
    }

    #[test]
    fn nested_additive_identity() {
        assert_eq!(simplify_str("+ x + 0 10"), "+ x 10");
    }

    #[test]
    fn additive_identity_then_fold() {
        // removing the zero leaves two constants under the `+`, which then fold
        assert_eq!(simplify_str("+ 1 + 0 10"), "11");
    }

    #[test]
    fn multiplicative_identity() {
        assert_eq!(simplify_str("* 2 1"), "2");
        assert_eq!(simplify_str("* 1 x"), "x");
    }

    #[test]
    fn multiplicative_identity_subexpression() {
        // the surviving operand is a whole subtree, not just a leaf
        assert_eq!(simplify_str("* + a b 1"), "+ a b");
        assert_eq!(simplify_str("* 1 + a b"), "+ a b");
    }

    #[test]
    fn multiply_zero() {
        assert_eq!(simplify_str("* 5 0"), "0");
        assert_eq!(simplify_str("* 0 x"), "0");
    }

    #[test]
    fn constant_fold() {
        assert_eq!(simplify_str("+ 1 2"), "3");
        assert_eq!(simplify_str("- 3 5"), "-2");
        assert_eq!(simplify_str("/ 8 2"), "4");
    }

    #[test]
    fn no_fold_across_symbol() {
        assert_eq!(simplify_str("+ x 2"), "+ x 2");
        assert_eq!(simplify_str("* x * 2 3"), "* x 6");
    }

    #[test]
    fn no_fold_of_inexact_division() {
        assert_eq!(simplify_str("/ 7 2"), "/ 7 2");
    }

    #[test]
    fn division_by_zero() {
        let expr = Parser::new("/ 5 0").try_parse_full::<Expr>().unwrap();
        let err = simplify(&expr).unwrap_err();
        assert!(err.kind.as_any().is::<crate::error::kind::DivisionByZero>());
    }

    #[test]
    fn child_rewrite_exposes_parent_rule() {
        // `* 0 5` collapses to `0`, which then triggers the additive identity at the parent
        assert_eq!(simplify_str("+ x * 0 5"), "x");
    }

    #[test]
    fn idempotent() {
        let inputs = ["+ 1 + 0 10", "* + a b 1", "+ x 2", "/ 7 2"];
        for input in inputs {
            let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
            let once = simplify(&expr).unwrap();
            let twice = simplify(&once).unwrap();
            assert_eq!(
                twice.as_prefix().to_string(),
                once.as_prefix().to_string(),
            );
        }
    }

    #[test]
    fn rule_steps() {
        let expr = Parser::new("+ 1 + 0 10").try_parse_full::<Expr>().unwrap();
        let (simplified, steps) = simplify_with_steps(&expr).unwrap();
        assert_eq!(simplified.as_prefix().to_string(), "11");
        assert_eq!(steps, vec![
            Step::AddZero,
            Step::ConstantFold,
        ]);
    }

    #[test]
    fn no_match_leaves_tree_unchanged() {
        let expr = Parser::new("+ x * y z").try_parse_full::<Expr>().unwrap();
        let (simplified, steps) = simplify_with_steps(&expr).unwrap();
        assert_eq!(simplified, expr);
        assert_eq!(steps, vec![]);
    }
}
