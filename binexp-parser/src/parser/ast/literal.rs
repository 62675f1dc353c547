use crate::{
    parser::{
        error::{kind, Error},
        fmt::{Postfix, Prefix},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use num_bigint::BigInt;
use std::{fmt, ops::Range};

/// An integer literal, such as `0` or `144`.
///
/// The token grammar only produces unsigned digit sequences, but rewrites over the tree are free
/// to introduce negative values, which render with a leading `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitInt {
    /// The value of the integer literal.
    pub value: BigInt,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for LitInt {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Int => {
                let value = token.lexeme.parse::<BigInt>().map_err(|_| {
                    Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                        expected: &[TokenKind::Int],
                        found: token.kind,
                    })
                })?;
                Ok(Self { value, span: token.span })
            },
            _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Int],
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for LitInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A named symbol, such as `x`. Symbols stand for unknown values, which is what stops constant
/// folding from evaluating across them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this symbol was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for LitSym {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Name => Ok(Self {
                name: token.lexeme.to_owned(),
                span: token.span,
            }),
            _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Name],
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A leaf of the expression tree: an integer literal or a named symbol. Leaves have no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// An integer literal, such as `0` or `144`.
    Integer(LitInt),

    /// A named symbol, such as `x`.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Integer(int) => int.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

impl<'source> Parse<'source> for Literal {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        match input.peek_token().map(|token| token.kind) {
            Some(TokenKind::Int) => Ok(Literal::Integer(LitInt::parse(input)?)),
            Some(TokenKind::Name) => Ok(Literal::Symbol(LitSym::parse(input)?)),
            _ => {
                let token = input.next_token()?;
                Err(Error::new(vec![token.span], kind::UnexpectedToken {
                    expected: &[TokenKind::Int, TokenKind::Name],
                    found: token.kind,
                }))
            },
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Integer(int) => int.fmt(f),
            Literal::Symbol(sym) => sym.fmt(f),
        }
    }
}

/// A leaf renders as its literal text in every notation.
impl Prefix for Literal {
    fn fmt_prefix(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Postfix for Literal {
    fn fmt_postfix(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
