use crate::{
    parser::{
        ast::expr::Expr,
        error::{kind, Error},
        fmt::{Postfix, Prefix},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOpKind {
    /// Returns the operator symbol as written in source.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl<'source> Parse<'source> for BinOp {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Add => Ok(BinOpKind::Add),
            TokenKind::Sub => Ok(BinOpKind::Sub),
            TokenKind::Mul => Ok(BinOpKind::Mul),
            TokenKind::Div => Ok(BinOpKind::Div),
            _ => Err(Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                expected: &[
                    TokenKind::Add,
                    TokenKind::Sub,
                    TokenKind::Mul,
                    TokenKind::Div,
                ],
                found: token.kind,
            })),
        }?;

        Ok(Self {
            kind,
            span: token.span,
        })
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// A binary expression written in prefix order, such as `+ 1 2`. Both operands are themselves
/// expressions, so a binary node always owns exactly two fully-formed children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl<'source> Parse<'source> for Binary {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let op = BinOp::parse(input)?;
        let lhs = Expr::parse(input)?;
        let rhs = Expr::parse(input)?;
        let span = op.span.start..rhs.span().end;

        Ok(Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        })
    }
}

/// The infix rendering is fully parenthesized; no parentheses are elided based on precedence.
impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.lhs, self.op, self.rhs)
    }
}

impl Prefix for Binary {
    fn fmt_prefix(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.op)?;
        self.lhs.fmt_prefix(f)?;
        write!(f, " ")?;
        self.rhs.fmt_prefix(f)
    }
}

impl Postfix for Binary {
    fn fmt_postfix(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.lhs.fmt_postfix(f)?;
        write!(f, " ")?;
        self.rhs.fmt_postfix(f)?;
        write!(f, " {}", self.op)
    }
}
