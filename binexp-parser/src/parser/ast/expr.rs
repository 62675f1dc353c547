use crate::{
    parser::{
        ast::{binary::Binary, literal::Literal},
        error::{kind, Error},
        fmt::{Postfix, Prefix, TreeFormatter},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use num_bigint::BigInt;
use std::{fmt, ops::Range};

/// Represents any kind of expression in prefix-notation form.
///
/// An expression is a strict binary tree: leaves are [`Literal`]s, interior nodes are [`Binary`]
/// operations owning exactly two children. There is no sharing of subtrees; every node has exactly
/// one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A binary operation, such as `+ 1 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// If this expression is an integer literal, returns its value.
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Expr::Literal(Literal::Integer(int)) => Some(&int.value),
            _ => None,
        }
    }

    /// Wraps the expression in a [`TreeFormatter`], which renders it as an indented multi-line
    /// tree for debugging.
    pub fn as_tree(&self) -> TreeFormatter<'_> {
        TreeFormatter::new(self)
    }
}

impl<'source> Parse<'source> for Expr {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        // the first token of an expression decides its shape, so peeking one token ahead is all
        // the lookahead this grammar ever needs
        match input.peek_token().map(|token| token.kind) {
            Some(TokenKind::Int) | Some(TokenKind::Name) => {
                Ok(Expr::Literal(Literal::parse(input)?))
            },
            Some(kind) if kind.is_op() => Ok(Expr::Binary(Binary::parse(input)?)),
            Some(_) => {
                let token = input.next_token()?;
                Err(Error::new(vec![token.span], kind::UnexpectedToken {
                    expected: &[
                        TokenKind::Int,
                        TokenKind::Name,
                        TokenKind::Add,
                        TokenKind::Sub,
                        TokenKind::Mul,
                        TokenKind::Div,
                    ],
                    found: token.kind,
                }))
            },
            None => Err(input.error(kind::MalformedExpression)),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

impl Prefix for Expr {
    fn fmt_prefix(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt_prefix(f),
            Expr::Binary(binary) => binary.fmt_prefix(f),
        }
    }
}

impl Postfix for Expr {
    fn fmt_postfix(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt_postfix(f),
            Expr::Binary(binary) => binary.fmt_postfix(f),
        }
    }
}
