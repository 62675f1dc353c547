//! Parser for binary arithmetic expressions given in prefix-notation token form.
//!
//! The input is a flat sequence of whitespace-separated tokens in prefix order, such as
//! `+ 1 * x 2`. [`tokenizer`] classifies each token as an integer literal, a name, or an operator
//! symbol, and [`parser`] consumes the classified tokens left-to-right into an
//! [`Expr`](parser::ast::expr::Expr) tree. The tree can be rendered back out in prefix, infix, or
//! postfix notation through the formatters in [`parser::fmt`].
//!
//! ```
//! use binexp_parser::parser::{ast::expr::Expr, fmt::Prefix, Parser};
//!
//! let expr = Parser::new("+ 1 * x 2").try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.as_prefix().to_string(), "+ 1 * x 2");
//! assert_eq!(expr.to_string(), "(1 + (x * 2))");
//! ```

pub mod parser;
pub mod tokenizer;
