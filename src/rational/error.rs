// src/rational/error.rs

use std::fmt;

use thiserror::Error;

/// Which operand of an expression failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandSide {
    Left,
    Right,
}

impl fmt::Display for OperandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandSide::Left => f.write_str("left"),
            OperandSide::Right => f.write_str("right"),
        }
    }
}

/// Every failure the core can report.
///
/// The evaluator never converts one family into the other:
/// - bad input shape (`MissingOrMalformedOperator`, `InvalidOperand`)
/// - well-formed but undefined (`DivideByZero`)
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    #[error("No text was provided to parse.")]
    NullInput,

    #[error("'{text}' is not a valid rational number format.")]
    MalformedText { text: String },

    #[error("Zero is not a valid denominator value.")]
    UndefinedNumber,

    #[error("At most one of the whole number, numerator and denominator can be negative.")]
    MalformedSign,

    #[error("'{component}' is outside the supported range for a number component.")]
    OutOfRange { component: String },

    #[error("An arithmetic operand is missing.")]
    NullOperand,

    #[error("Attempted to divide by zero.")]
    DivideByZero,

    #[error("'{expression}' must contain exactly one operator (+ - * /) surrounded by spaces.")]
    MissingOrMalformedOperator { expression: String },

    #[error("The {side} operand is invalid: {source}")]
    InvalidOperand {
        side: OperandSide,
        #[source]
        source: Box<RationalError>,
    },
}

impl RationalError {
    pub(crate) fn invalid_operand(side: OperandSide, source: RationalError) -> Self {
        RationalError::InvalidOperand {
            side,
            source: Box::new(source),
        }
    }
}

pub type RationalResult<T> = Result<T, RationalError>;
