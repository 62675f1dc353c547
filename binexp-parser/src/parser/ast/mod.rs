pub mod binary;
pub mod expr;
pub mod literal;

pub use binary::{BinOp, BinOpKind, Binary};
pub use expr::Expr;
pub use literal::{LitInt, LitSym, Literal};
