use std::fmt::{Display, Formatter, Result};
use super::ast::expr::Expr;

/// A trait for types that can be formatted in prefix notation, with the operator written before
/// its operands.
pub trait Prefix {
    /// Format the value in prefix notation.
    fn fmt_prefix(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`PrefixFormatter`], which implements [`Display`].
    fn as_prefix(&self) -> PrefixFormatter<'_, Self> {
        PrefixFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Prefix`].
pub struct PrefixFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for PrefixFormatter<'_, T>
where
    T: Prefix,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_prefix(f)
    }
}

/// A trait for types that can be formatted in postfix notation, with the operator written after
/// its operands.
pub trait Postfix {
    /// Format the value in postfix notation.
    fn fmt_postfix(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`PostfixFormatter`], which implements [`Display`].
    fn as_postfix(&self) -> PostfixFormatter<'_, Self> {
        PostfixFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Postfix`].
pub struct PostfixFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for PostfixFormatter<'_, T>
where
    T: Postfix,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_postfix(f)
    }
}

/// Renders an expression as a multi-line tree, each child indented two spaces deeper than its
/// parent. A debugging aid; the single-line notations are the load-bearing output formats.
pub struct TreeFormatter<'a>(&'a Expr);

impl<'a> TreeFormatter<'a> {
    pub(crate) fn new(expr: &'a Expr) -> Self {
        Self(expr)
    }
}

impl Display for TreeFormatter<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        fn fmt_node(expr: &Expr, f: &mut Formatter, depth: usize) -> Result {
            for _ in 0..depth {
                write!(f, "  ")?;
            }
            match expr {
                Expr::Literal(literal) => write!(f, "{}", literal),
                Expr::Binary(binary) => {
                    writeln!(f, "{}", binary.op)?;
                    fmt_node(&binary.lhs, f, depth + 1)?;
                    writeln!(f)?;
                    fmt_node(&binary.rhs, f, depth + 1)
                },
            }
        }

        fmt_node(self.0, f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parser::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn fmt_prefix() {
        let expr = Parser::new("+ 1 * x 2").try_parse_full::<Expr>().unwrap();
        let fmt = format!("{}", expr.as_prefix());

        assert_eq!(fmt, "+ 1 * x 2");
    }

    #[test]
    fn fmt_infix() {
        let expr = Parser::new("+ 1 * x 2").try_parse_full::<Expr>().unwrap();
        let fmt = format!("{}", expr);

        assert_eq!(fmt, "(1 + (x * 2))");
    }

    #[test]
    fn fmt_postfix() {
        let expr = Parser::new("+ 1 * x 2").try_parse_full::<Expr>().unwrap();
        let fmt = format!("{}", expr.as_postfix());

        assert_eq!(fmt, "1 x 2 * +");
    }

    #[test]
    fn fmt_leaf() {
        let expr = Parser::new("42").try_parse_full::<Expr>().unwrap();

        assert_eq!(format!("{}", expr.as_prefix()), "42");
        assert_eq!(format!("{}", expr), "42");
        assert_eq!(format!("{}", expr.as_postfix()), "42");
    }

    #[test]
    fn fmt_tree() {
        let expr = Parser::new("+ 1 + 0 10").try_parse_full::<Expr>().unwrap();
        let fmt = format!("{}", expr.as_tree());

        assert_eq!(fmt, "+\n  1\n  +\n    0\n    10");
    }
}
