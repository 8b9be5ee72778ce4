//! Decimal numbers under an explicit working precision.
//!
//! - `Precision`: working precision `P` (significant digits). Values compare at `P − 1`.
//! - `Decimal`: exact literals, arithmetic rounded half-even to `P`.
//!
//! There is no process-wide context: every `Decimal` remembers the `Precision` it
//! was built under, and a single analysis builds all of its values from one
//! `Precision`.

mod decimal;

pub use decimal::Decimal;

use crate::error::{Result, SymmetryError};
use crate::geom::Point;

/// Working precision in significant digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Precision {
    digits: u32,
}

impl Precision {
    pub const DEFAULT_DIGITS: u32 = 28;

    /// At least 2 digits, so the comparison precision keeps one digit.
    pub fn new(digits: u32) -> Result<Self> {
        if digits < 2 {
            return Err(SymmetryError::InvalidPrecision { digits });
        }
        Ok(Self { digits })
    }

    #[inline]
    pub fn digits(self) -> u32 {
        self.digits
    }

    /// Digits kept by equality and hashing.
    #[inline]
    pub fn compare_digits(self) -> u32 {
        self.digits - 1
    }

    pub fn decimal(self, literal: &str) -> Result<Decimal> {
        Decimal::parse(literal, self)
    }

    pub fn int(self, v: i64) -> Decimal {
        Decimal::from_int(v, self)
    }

    /// Lossy: logs a warning, see `Decimal::from_f64`.
    pub fn float(self, v: f64) -> Result<Decimal> {
        Decimal::from_f64(v, self)
    }

    pub fn point(self, x: &str, y: &str) -> Result<Point> {
        Ok(Point::new(self.decimal(x)?, self.decimal(y)?))
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            digits: Self::DEFAULT_DIGITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_bounds() {
        assert_eq!(
            Precision::new(1),
            Err(SymmetryError::InvalidPrecision { digits: 1 })
        );
        assert!(Precision::new(0).is_err());
        let p = Precision::new(2).unwrap();
        assert_eq!(p.compare_digits(), 1);
        assert_eq!(Precision::default().digits(), 28);
    }

    #[test]
    fn factory_builds_values_under_its_precision() {
        let p = Precision::new(12).unwrap();
        let x = p.decimal("0.1").unwrap();
        assert_eq!(x.precision(), p);
        assert_eq!(&x + &p.decimal("0.2").unwrap(), p.decimal("0.3").unwrap());
        let pt = p.point("1", "-2.5").unwrap();
        assert_eq!(pt.y(), &p.decimal("-2.50").unwrap());
        assert!(p.point("1", "two").is_err());
    }

    #[test]
    fn precision_decides_what_counts_as_equal() {
        let near = "1.0000000000000000000000000000000000000001";
        let coarse = Precision::default();
        assert_eq!(coarse.decimal(near).unwrap(), coarse.int(1));
        let fine = Precision::new(100).unwrap();
        assert_ne!(fine.decimal(near).unwrap(), fine.int(1));
    }
}
