// src/rational/ops.rs
//
// The four operators. Every result goes back through `RationalValue::reduce`
// (the tail of the construction path), so results are always canonical.
// Intermediate products stay in BigInt: no ceiling on results.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use log::debug;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::error::{RationalError, RationalResult};
use super::value::RationalValue;

/// Operator symbol of an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Applies the operator. Either side may be absent (`None`), which is a
    /// `NullOperand` failure; `Divide` also fails with `DivideByZero`.
    ///
    /// Accepts `&RationalValue` or `Option<&RationalValue>` on each side.
    pub fn apply<'a>(
        self,
        lhs: impl Into<Option<&'a RationalValue>>,
        rhs: impl Into<Option<&'a RationalValue>>,
    ) -> RationalResult<RationalValue> {
        let (lhs, rhs) = match (lhs.into(), rhs.into()) {
            (Some(l), Some(r)) => (l, r),
            _ => return Err(RationalError::NullOperand),
        };

        let out = match self {
            Operator::Add => lhs.sum(rhs),
            Operator::Subtract => lhs.difference(rhs),
            Operator::Multiply => lhs.product(rhs),
            Operator::Divide => lhs.checked_div(rhs)?,
        };
        debug!("{lhs} {} {rhs} = {out}", self.symbol());
        Ok(out)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/* ------------------------ Arithmetic ------------------------ */

impl RationalValue {
    /// Result with a strictly positive denominator.
    fn from_positive_denominator(numer: BigInt, denom: BigInt) -> Self {
        let negative = numer.is_negative();
        RationalValue::reduce(numer.abs(), denom, negative)
    }

    fn sum(&self, rhs: &Self) -> Self {
        let numer = self.numerator() * rhs.denominator() + self.denominator() * rhs.numerator();
        let denom = self.denominator() * rhs.denominator();
        Self::from_positive_denominator(numer, denom)
    }

    fn difference(&self, rhs: &Self) -> Self {
        let numer = self.numerator() * rhs.denominator() - self.denominator() * rhs.numerator();
        let denom = self.denominator() * rhs.denominator();
        Self::from_positive_denominator(numer, denom)
    }

    fn product(&self, rhs: &Self) -> Self {
        let numer = self.numerator() * rhs.numerator();
        let denom = self.denominator() * rhs.denominator();
        Self::from_positive_denominator(numer, denom)
    }

    /// `self / rhs`. Fails with `DivideByZero` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> RationalResult<Self> {
        if rhs.numerator().is_zero() {
            return Err(RationalError::DivideByZero);
        }

        let mut numer = self.numerator() * rhs.denominator();
        let mut denom = self.denominator() * rhs.numerator();

        // two negatives would be a sign error for the constructor
        if numer.is_negative() && denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        RationalValue::from_components(BigInt::zero(), numer, denom)
    }
}

/* ------------------------ std::ops ------------------------ */

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $inner:ident, $out:ty) => {
        impl<'a, 'b> $imp<&'b RationalValue> for &'a RationalValue {
            type Output = $out;

            fn $method(self, rhs: &'b RationalValue) -> $out {
                RationalValue::$inner(self, rhs)
            }
        }

        impl $imp<RationalValue> for RationalValue {
            type Output = $out;

            fn $method(self, rhs: RationalValue) -> $out {
                RationalValue::$inner(&self, &rhs)
            }
        }

        impl<'b> $imp<&'b RationalValue> for RationalValue {
            type Output = $out;

            fn $method(self, rhs: &'b RationalValue) -> $out {
                RationalValue::$inner(&self, rhs)
            }
        }

        impl<'a> $imp<RationalValue> for &'a RationalValue {
            type Output = $out;

            fn $method(self, rhs: RationalValue) -> $out {
                RationalValue::$inner(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, sum, RationalValue);
forward_binop!(Sub, sub, difference, RationalValue);
forward_binop!(Mul, mul, product, RationalValue);
forward_binop!(Div, div, checked_div, RationalResult<RationalValue>);
