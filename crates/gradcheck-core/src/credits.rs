//! Exact credit arithmetic.
//!
//! Transcripts print credits as integers, but fractional credit values exist
//! in the wild, so credits are held as exact decimals and only rendered at
//! output boundaries, where `3.0` prints as `3`.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive, Zero};
use serde::{Serialize, Serializer};
use tracing::debug;

/// A non-negative credit amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Credits(BigDecimal);

impl Credits {
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    /// Parse a credit field, substituting zero when it is not a number.
    ///
    /// A malformed field never aborts the surrounding parse.
    pub fn parse_or_zero(raw: &str) -> Self {
        match raw.trim().parse::<Self>() {
            Ok(c) => c,
            Err(e) => {
                debug!(raw, error = %e, "credit field is not numeric, using 0");
                Self::zero()
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Credits still missing to reach `self` as a goal: `max(0, self - earned)`.
    pub fn gap_to(&self, earned: &Credits) -> Credits {
        if earned >= self {
            Self::zero()
        } else {
            Self(&self.0 - &earned.0)
        }
    }

    /// Lossy view for numeric output formats.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl FromStr for Credits {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<BigDecimal>().map(Self)
    }
}

impl From<u32> for Credits {
    fn from(n: u32) -> Self {
        Self(BigDecimal::from(n))
    }
}

impl Add for Credits {
    type Output = Credits;

    fn add(self, rhs: Credits) -> Credits {
        Credits(self.0 + rhs.0)
    }
}

impl AddAssign<&Credits> for Credits {
    fn add_assign(&mut self, rhs: &Credits) {
        self.0 += &rhs.0;
    }
}

impl<'a> Sum<&'a Credits> for Credits {
    fn sum<I: Iterator<Item = &'a Credits>>(iter: I) -> Self {
        iter.fold(Credits::zero(), |mut acc, c| {
            acc += c;
            acc
        })
    }
}

impl Sum for Credits {
    fn sum<I: Iterator<Item = Credits>>(iter: I) -> Self {
        iter.fold(Credits::zero(), Add::add)
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.with_scale(0))
        } else {
            write!(f, "{}", self.0.normalized())
        }
    }
}

/// Integral amounts serialise as JSON integers, everything else as floats.
impl Serialize for Credits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_integer()
            && let Some(n) = self.0.to_i64()
        {
            return serializer.serialize_i64(n);
        }
        serializer.serialize_f64(self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Credits {
        s.parse().unwrap()
    }

    #[test]
    fn integral_display_drops_fraction() {
        assert_eq!(c("3").to_string(), "3");
        assert_eq!(c("3.0").to_string(), "3");
        assert_eq!(c("30").to_string(), "30");
        assert_eq!(c("128.00").to_string(), "128");
    }

    #[test]
    fn fractional_display_is_trimmed() {
        assert_eq!(c("2.5").to_string(), "2.5");
        assert_eq!(c("2.50").to_string(), "2.5");
    }

    #[test]
    fn malformed_field_falls_back_to_zero() {
        assert!(Credits::parse_or_zero("abc").is_zero());
        assert!(Credits::parse_or_zero("").is_zero());
        assert_eq!(Credits::parse_or_zero(" 3 "), c("3"));
    }

    #[test]
    fn sums_exactly() {
        let parts = [c("0.1"), c("0.2"), c("0.7")];
        let total: Credits = parts.iter().sum();
        assert_eq!(total, c("1"));
    }

    #[test]
    fn gap_is_clamped_at_zero() {
        assert_eq!(Credits::from(10).gap_to(&c("3")), c("7"));
        assert_eq!(Credits::from(4).gap_to(&c("6")), Credits::zero());
        assert_eq!(Credits::from(1).gap_to(&c("1")), Credits::zero());
    }

    #[test]
    fn serialises_integers_as_integers() {
        assert_eq!(serde_json::to_string(&c("3.0")).unwrap(), "3");
        assert_eq!(serde_json::to_string(&c("2.5")).unwrap(), "2.5");
    }
}
