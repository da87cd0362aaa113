// src/rational/literal.rs
//
// Single-literal grammar (after trimming outer whitespace):
//
//   whole     : -? digits
//   fraction  : -? digits / digits
//   mixed     : -? digits _ digits / digits
//
// The leading `-` is the only place a minus may appear. Any other character
// (inner space, second minus, letter, missing part) is a mismatch.

use std::str::FromStr;

use log::trace;

use super::error::{RationalError, RationalResult};
use super::value::RationalValue;

/// Shape recognised by the scanner, borrowing the digit runs of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape<'a> {
    Whole {
        whole: &'a str,
    },
    Fraction {
        numerator: &'a str,
        denominator: &'a str,
    },
    Mixed {
        whole: &'a str,
        numerator: &'a str,
        denominator: &'a str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Literal<'a> {
    negative: bool,
    shape: Shape<'a>,
}

/* ------------------------ Scanner ------------------------ */

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// One or more ASCII digits.
    fn digits(&mut self) -> Option<&'a str> {
        let text = self.text;
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        let end = self.pos;
        (end > start).then(|| &text[start..end])
    }

    fn at_end(&self) -> bool {
        self.pos == self.text.len()
    }
}

fn scan(text: &str) -> Option<Literal<'_>> {
    let mut c = Cursor::new(text);

    let negative = c.eat(b'-');
    let first = c.digits()?;

    let shape = if c.at_end() {
        Shape::Whole { whole: first }
    } else if c.eat(b'/') {
        let denominator = c.digits()?;
        Shape::Fraction {
            numerator: first,
            denominator,
        }
    } else if c.eat(b'_') {
        let numerator = c.digits()?;
        if !c.eat(b'/') {
            return None;
        }
        let denominator = c.digits()?;
        Shape::Mixed {
            whole: first,
            numerator,
            denominator,
        }
    } else {
        return None;
    };

    c.at_end().then_some(Literal { negative, shape })
}

/* ------------------------ Components ------------------------ */

/// Parses one digit run into the 32-bit literal range, with its sign.
/// `-2147483648` fits, `2147483648` does not.
fn component(negative: bool, digits: &str) -> RationalResult<i32> {
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };

    // digits are already validated: the only possible failure is the range
    signed
        .parse::<i32>()
        .map_err(|_| RationalError::OutOfRange { component: signed })
}

fn is_all_zeros(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0')
}

/* ------------------------ API ------------------------ */

/// Parses a literal: `5`, `-3/4`, `1_1/2`.
///
/// Accepts `&str` or `Option<&str>`; `None` fails with `NullInput`.
pub fn parse_literal<'a>(text: impl Into<Option<&'a str>>) -> RationalResult<RationalValue> {
    let raw = text.into().ok_or(RationalError::NullInput)?;
    let trimmed = raw.trim();

    let lit = scan(trimmed).ok_or_else(|| RationalError::MalformedText {
        text: raw.to_string(),
    })?;
    trace!("literal {trimmed:?} -> {lit:?}");

    match lit.shape {
        Shape::Whole { whole } => {
            let w = component(lit.negative, whole)?;
            Ok(RationalValue::from_whole(w))
        }
        Shape::Fraction {
            numerator,
            denominator,
        } => {
            let n = component(lit.negative, numerator)?;
            let d = component(false, denominator)?;
            RationalValue::new(0, n, d)
        }
        Shape::Mixed {
            whole,
            numerator,
            denominator,
        } => {
            // `-0_5/3` : nothing left to carry the sign on the whole part
            let (w, n) = if lit.negative && is_all_zeros(whole) {
                (0, -component(false, numerator)?)
            } else {
                (component(lit.negative, whole)?, component(false, numerator)?)
            };
            let d = component(false, denominator)?;
            RationalValue::new(w, n, d)
        }
    }
}

/// Non-failing form: `None` for every failure kind.
pub fn try_parse_literal<'a>(text: impl Into<Option<&'a str>>) -> Option<RationalValue> {
    parse_literal(text).ok()
}

impl FromStr for RationalValue {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literal(s)
    }
}
