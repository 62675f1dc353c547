//! Errors that can occur while simplifying an expression.

pub use binexp_error::Error;

pub mod kind {
    use ariadne::Fmt;
    use binexp_error::{ErrorKind, EXPR};

    /// Constant folding encountered a division whose divisor is the constant zero.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DivisionByZero;

    impl ErrorKind for DivisionByZero {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn message(&self) -> String {
            "cannot divide by zero".to_owned()
        }

        fn labels(&self) -> Vec<String> {
            vec![format!("the divisor of this {} is zero", "division".fg(EXPR))]
        }
    }
}
