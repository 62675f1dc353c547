pub mod ast;
pub mod error;
pub mod fmt;

use binexp_error::ErrorKind;
use error::{kind, Error};
use super::tokenizer::{tokenize_complete, Token};
use std::ops::Range;

/// A trait for values that can be parsed from a stream of prefix-notation tokens.
pub trait Parse<'source>: Sized {
    /// Parses a value from the given stream, consuming the tokens it needs from the front.
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error>;
}

/// A high-level parser for prefix-notation expressions. This is the type to use to parse a flat
/// token sequence, such as `+ 1 0`, into an abstract syntax tree.
///
/// The grammar is deliberately small: the first token of an expression decides everything, so
/// parsing never needs to backtrack. Each recursive call into [`Parse::parse`] consumes a prefix
/// of the remaining tokens.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns true if the source contains no tokens other than whitespace.
    pub fn is_empty(&self) -> bool {
        self.tokens.iter().all(|token| token.is_whitespace())
    }

    /// Returns the next non-whitespace token without advancing the cursor. Returns [`None`] if
    /// only whitespace remains.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..].iter().find(|token| !token.is_whitespace())
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns a [`kind::MalformedExpression`] error if there are no more tokens, since the only
    /// way to run out of tokens mid-parse is an operator that is still missing an operand.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::MalformedExpression))
    }

    /// Parses a value from the given stream of tokens, requiring every token in the stream to be
    /// consumed.
    ///
    /// An empty (or all-whitespace) stream fails with [`kind::EmptyInput`]; unconsumed tokens
    /// remaining after the value was parsed fail with [`kind::TrailingTokens`].
    pub fn try_parse_full<T: Parse<'source>>(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::new(vec![self.eof_span()], kind::EmptyInput));
        }

        let value = T::parse(self)?;
        match self.peek_token() {
            Some(token) => Err(Error::new(
                vec![token.span.start..self.eof_span().end],
                kind::TrailingTokens,
            )),
            None => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ast::expr::Expr;
    use fmt::Prefix;
    use pretty_assertions::assert_eq;

    /// Parses the input and renders the tree back out in prefix notation.
    fn reprint(input: &str) -> String {
        let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
        expr.as_prefix().to_string()
    }

    #[test]
    fn parse_leaf() {
        assert_eq!(reprint("7"), "7");
        assert_eq!(reprint("x"), "x");
    }

    #[test]
    fn parse_nested() {
        assert_eq!(reprint("+ 1 * x 2"), "+ 1 * x 2");
        assert_eq!(reprint("/ - 8 2 + 1 2"), "/ - 8 2 + 1 2");
    }

    #[test]
    fn round_trip() {
        // serialization and reconstruction are inverses
        let inputs = ["+ 1 0", "* + a b / 4 2", "- x y"];
        for input in inputs {
            let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
            let printed = expr.as_prefix().to_string();
            assert_eq!(reprint(&printed), printed);
        }
    }

    #[test]
    fn missing_operand() {
        let err = Parser::new("+ 1").try_parse_full::<Expr>().unwrap_err();
        assert!(err.kind.as_any().is::<kind::MalformedExpression>());
    }

    #[test]
    fn empty_input() {
        let err = Parser::new("").try_parse_full::<Expr>().unwrap_err();
        assert!(err.kind.as_any().is::<kind::EmptyInput>());

        let err = Parser::new("   \n").try_parse_full::<Expr>().unwrap_err();
        assert!(err.kind.as_any().is::<kind::EmptyInput>());
    }

    #[test]
    fn trailing_tokens() {
        let err = Parser::new("+ 1 2 3").try_parse_full::<Expr>().unwrap_err();
        assert!(err.kind.as_any().is::<kind::TrailingTokens>());
    }

    #[test]
    fn unexpected_token() {
        let err = Parser::new("+ 1 $").try_parse_full::<Expr>().unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<kind::UnexpectedToken>().unwrap();
        assert_eq!(kind.found, crate::tokenizer::TokenKind::Unknown);
    }
}
