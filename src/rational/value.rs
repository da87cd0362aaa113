// src/rational/value.rs

use log::trace;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use super::error::{RationalError, RationalResult};

/// Exact fraction, always stored in lowest terms.
///
/// Invariants (hold for every live value):
/// - `denom > 0` : the sign lives in `numer` only
/// - `gcd(|numer|, denom) == 1` ; zero is stored as `0/1`
///
/// Inputs are 32-bit, storage is unbounded: results of arithmetic never
/// overflow.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RationalValue {
    numer: BigInt,
    denom: BigInt,
}

/* ------------------------ GCD ------------------------ */

/// Greatest common divisor by repeated remainder.
/// Replaces the larger of the pair by its remainder modulo the smaller until
/// one of them reaches zero, then keeps the other. `gcd(0, 0)` is 1.
pub(crate) fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();

    if a.is_zero() && b.is_zero() {
        return BigInt::one();
    }

    while !a.is_zero() && !b.is_zero() {
        if a > b {
            a = &a % &b;
        } else {
            b = &b % &a;
        }
    }

    a.max(b)
}

/* ------------------------ Construction ------------------------ */

impl RationalValue {
    /// `whole + numerator/denominator`, e.g. `new(-1, 1, 2)` is `-3/2`.
    ///
    /// Fails with `UndefinedNumber` if `denominator == 0` (checked first),
    /// then with `MalformedSign` if more than one input is negative.
    pub fn new(whole: i32, numerator: i32, denominator: i32) -> RationalResult<Self> {
        Self::from_components(
            BigInt::from(whole),
            BigInt::from(numerator),
            BigInt::from(denominator),
        )
    }

    /// `numerator/denominator`, same as `new(0, numerator, denominator)`.
    pub fn from_fraction(numerator: i32, denominator: i32) -> RationalResult<Self> {
        Self::new(0, numerator, denominator)
    }

    /// Whole number `n/1`. Cannot fail.
    pub fn from_whole(whole: i32) -> Self {
        let whole = BigInt::from(whole);
        let negative = whole.is_negative();
        Self::reduce(whole.abs(), BigInt::one(), negative)
    }

    /// Zero (`0/1`).
    pub fn zero() -> Self {
        Self {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    /// Shared construction path, over the unbounded domain.
    /// Also used by division once intermediate signs are settled.
    pub(crate) fn from_components(
        whole: BigInt,
        numerator: BigInt,
        denominator: BigInt,
    ) -> RationalResult<Self> {
        if denominator.is_zero() {
            return Err(RationalError::UndefinedNumber);
        }

        let negatives = [&whole, &numerator, &denominator]
            .iter()
            .filter(|c| c.is_negative())
            .count();
        if negatives > 1 {
            return Err(RationalError::MalformedSign);
        }

        let denom = denominator.abs();
        let combined = numerator.abs() + whole.abs() * &denom;

        Ok(Self::reduce(combined, denom, negatives == 1))
    }

    /// Reduction by the gcd. `magnitude >= 0`, `denom > 0`.
    pub(crate) fn reduce(magnitude: BigInt, denom: BigInt, negative: bool) -> Self {
        debug_assert!(!magnitude.is_negative());
        debug_assert!(denom.is_positive());

        let g = gcd(&magnitude, &denom);
        let mut numer = magnitude / &g;
        if negative {
            numer = -numer;
        }
        let denom = denom / g;

        trace!("reduce -> {numer}/{denom}");
        Self { numer, denom }
    }

    /* ------------------------ Accessors ------------------------ */

    pub fn numerator(&self) -> &BigInt {
        &self.numer
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }
}

impl From<i32> for RationalValue {
    fn from(whole: i32) -> Self {
        RationalValue::from_whole(whole)
    }
}

impl Default for RationalValue {
    fn default() -> Self {
        RationalValue::zero()
    }
}
