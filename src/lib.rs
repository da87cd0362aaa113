//! Exact rational numbers: canonical values, literal parsing, mixed/improper
//! text, the four operators, and `"<literal> <op> <literal>"` evaluation.
//!
//! ```
//! use rational_shell::{evaluate, parse_literal};
//!
//! assert_eq!(evaluate("1/7 / -1/5").unwrap().to_string(), "-5/7");
//! assert_eq!(parse_literal("1_2/4").unwrap().to_improper_fraction_text(), "3/2");
//! ```

pub mod rational;
pub mod shell;

// minimal public API
pub use rational::{
    evaluate, evaluate_to_text, parse_literal, split_expression, try_parse_literal, OperandSide,
    Operator, ParsedExpression, RationalError, RationalResult, RationalValue,
};
