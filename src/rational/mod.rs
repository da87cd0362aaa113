//! Exact rational core
//!
//! Internal layout:
//! - value.rs   : RationalValue, construction + gcd reduction
//! - format.rs  : mixed / improper text
//! - ops.rs     : + - * / (unbounded results) + Operator
//! - literal.rs : single-literal grammar (whole, fraction, mixed)
//! - eval.rs    : two-operand expression grammar + evaluation
//! - error.rs   : RationalError

pub mod error;
pub mod eval;
pub mod format;
pub mod literal;
pub mod ops;
pub mod value;

#[cfg(test)]
mod tests_scenarios;


pub use error::{OperandSide, RationalError, RationalResult};
pub use eval::{evaluate, evaluate_to_text, split_expression, ParsedExpression};
pub use literal::{parse_literal, try_parse_literal};
pub use ops::Operator;
pub use value::RationalValue;
