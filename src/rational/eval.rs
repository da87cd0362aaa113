//! Two-operand expression evaluation (real pipeline)
//!
//! text -> split on ` op ` -> parse left -> parse right -> operator -> value
//!
//! The operator token is exactly `' ' op ' '`. Operands are trimmed, so extra
//! spaces around the token are tolerated; spaces inside an operand are not.

use log::debug;

use super::error::{OperandSide, RationalError, RationalResult};
use super::literal::parse_literal;
use super::ops::Operator;
use super::value::RationalValue;

/// `left op right`, borrowed from the input text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedExpression<'a> {
    pub left: &'a str,
    pub operator: Operator,
    pub right: &'a str,
}

/// Locates the single ` op ` token.
///
/// Fails with `MissingOrMalformedOperator` when there is no such token
/// (`1-3`, `3 -3`) or more than one (`3 * 4 - 4`).
pub fn split_expression(text: &str) -> RationalResult<ParsedExpression<'_>> {
    let bytes = text.as_bytes();

    let mut candidates = bytes.windows(3).enumerate().filter_map(|(i, w)| {
        if w[0] == b' ' && w[2] == b' ' {
            Operator::from_symbol(w[1] as char).map(|op| (i, op))
        } else {
            None
        }
    });

    match (candidates.next(), candidates.next()) {
        (Some((i, operator)), None) => Ok(ParsedExpression {
            left: &text[..i],
            operator,
            right: &text[i + 3..],
        }),
        _ => Err(RationalError::MissingOrMalformedOperator {
            expression: text.to_string(),
        }),
    }
}

/// Public API: evaluates `"<literal> <op> <literal>"`.
///
/// - operand failures come back as `InvalidOperand` with the side
/// - `DivideByZero` passes through untouched
pub fn evaluate(text: &str) -> RationalResult<RationalValue> {
    let parsed = split_expression(text)?;
    debug!(
        "expression {text:?} -> left={:?} op={} right={:?}",
        parsed.left, parsed.operator, parsed.right
    );

    let lhs = parse_literal(parsed.left.trim())
        .map_err(|e| RationalError::invalid_operand(OperandSide::Left, e))?;
    let rhs = parse_literal(parsed.right.trim())
        .map_err(|e| RationalError::invalid_operand(OperandSide::Right, e))?;

    parsed.operator.apply(&lhs, &rhs)
}

/// `evaluate` followed by the mixed text of the result.
pub fn evaluate_to_text(text: &str) -> RationalResult<String> {
    evaluate(text).map(|v| v.to_mixed_text())
}
