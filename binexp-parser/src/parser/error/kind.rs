use ariadne::Fmt;
use binexp_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// The token sequence ran out while an operator was still missing an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedExpression;

impl ErrorKind for MalformedExpression {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn message(&self) -> String {
        "malformed expression: unexpected end of input".to_owned()
    }

    fn labels(&self) -> Vec<String> {
        vec![format!("you might need to add another {} here", "operand".fg(EXPR))]
    }

    fn help(&self) -> Option<String> {
        Some("every operator takes exactly two operands".to_owned())
    }
}

/// The token sequence contained no tokens at all.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyInput;

impl ErrorKind for EmptyInput {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn message(&self) -> String {
        "empty input".to_owned()
    }

    fn labels(&self) -> Vec<String> {
        vec![format!("add an {} here", "expression".fg(EXPR))]
    }
}

/// Tokens were left over after a complete expression was parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailingTokens;

impl ErrorKind for TrailingTokens {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn message(&self) -> String {
        "expected end of input".to_owned()
    }

    fn labels(&self) -> Vec<String> {
        vec![format!("the {} ended before these tokens", "expression".fg(EXPR))]
    }
}

/// An unexpected token was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

impl ErrorKind for UnexpectedToken {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn message(&self) -> String {
        "unexpected token".to_owned()
    }

    fn labels(&self) -> Vec<String> {
        vec![format!(
            "expected one of: {}",
            self.expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "),
        )]
    }

    fn help(&self) -> Option<String> {
        Some(format!("found {:?}", self.found))
    }
}
