//! Algebraic simplification of binary expression trees.
//!
//! # Simplification
//!
//! The entry point is the [`simplify()`] function, which accepts an
//! [`Expr`](binexp_parser::parser::ast::expr::Expr) produced by [`binexp_parser`] and returns a
//! reduced version of it.
//!
//! Simplification is done by applying a set of local rewrite rules to the expression in multiple
//! passes. Each rule is a function that accepts an expression and returns `Option<Expr>`; if the
//! rule is applicable to the expression, the rewritten expression is returned, and the caller
//! substitutes it for the original. Rules never mutate a node in place.
//!
//! The rule set lives in [`simplify::rules`] and covers the additive identity (`x + 0 = x`), the
//! multiplicative identity (`x * 1 = x`), multiplication by zero (`x * 0 = 0`), and constant
//! folding (`1 + 2 = 3`). Rules are re-applied, at every node, until a full pass changes nothing,
//! so a reduction exposed at a parent by the rewrite of a child is always found and the result is
//! a fixpoint of the rule set.
//!
//! Constant folding is the one fallible rule: folding a division whose divisor is the constant
//! zero surfaces a [`DivisionByZero`](error::kind::DivisionByZero) error rather than producing a
//! wrong tree.
//!
//! ```
//! use binexp_compute::simplify;
//! use binexp_parser::parser::{ast::expr::Expr, fmt::Prefix, Parser};
//!
//! let expr = Parser::new("+ x + 0 10").try_parse_full::<Expr>().unwrap();
//! let reduced = simplify(&expr).unwrap();
//! assert_eq!(reduced.as_prefix().to_string(), "+ x 10");
//! ```

pub mod error;
pub mod simplify;
pub mod step_collector;

pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
