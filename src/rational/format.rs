// src/rational/format.rs

use std::fmt;

use num_traits::Signed;

use super::value::RationalValue;

/* ------------------------ Text forms ------------------------ */

impl RationalValue {
    /// Improper form: `3/2`, `-7/9`, `2`, `0`.
    pub fn to_improper_fraction_text(&self) -> String {
        let n = self.numerator();
        let d = self.denominator();
        if self.is_integer() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    /// Mixed form: `1_1/2`, `-2_3/4`; proper fractions and integers
    /// fall back to the improper form (`1/2`, `-3`).
    pub fn to_mixed_text(&self) -> String {
        let n = self.numerator();
        let d = self.denominator();

        if self.is_integer() || &n.abs() < d {
            return self.to_improper_fraction_text();
        }

        let magnitude = n.abs();
        let whole = &magnitude / d;
        let remainder = &magnitude % d;
        let sign = if self.is_negative() { "-" } else { "" };

        format!("{sign}{whole}_{remainder}/{d}")
    }
}

impl fmt::Display for RationalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_mixed_text())
    }
}
