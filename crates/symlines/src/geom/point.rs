use std::fmt;

use nalgebra::Vector2;

use super::Line;
use crate::num::{Decimal, Precision};

/// Immutable point `(x, y)`. Equality and hashing follow the coordinates'
/// normalized values, in order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: Decimal,
    y: Decimal,
}

impl Point {
    #[inline]
    pub fn new(x: Decimal, y: Decimal) -> Self {
        debug_assert_eq!(x.precision(), y.precision(), "mixed precisions in point");
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> &Decimal {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &Decimal {
        &self.y
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.x.precision()
    }

    /// `((x1 + x2) / 2, (y1 + y2) / 2)`.
    pub fn midpoint(&self, other: &Point) -> Point {
        let two = self.precision().int(2);
        Point::new(
            &(&self.x + &other.x) / &two,
            &(&self.y + &other.y) / &two,
        )
    }

    #[inline]
    pub fn reflect(&self, line: &Line) -> Point {
        line.reflect(self)
    }

    /// Lossy `f64` view for plotting.
    pub fn approx(&self) -> Vector2<f64> {
        Vector2::new(self.x.to_f64(), self.y.to_f64())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
