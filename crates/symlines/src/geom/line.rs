use std::fmt;

use super::Point;
use crate::error::{Result, SymmetryError};
use crate::num::Decimal;

/// Line in slope-intercept or vertical form.
///
/// Invariants:
/// - The variant is the representation; a vertical line never equals a sloped one.
/// - Equality and hashing follow the normalized `Decimal` fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    /// `y = slope · x + intercept`
    Sloped { slope: Decimal, intercept: Decimal },
    /// `x = x`
    Vertical { x: Decimal },
}

impl Line {
    #[inline]
    pub fn sloped(slope: Decimal, intercept: Decimal) -> Self {
        Self::Sloped { slope, intercept }
    }

    #[inline]
    pub fn vertical(x: Decimal) -> Self {
        Self::Vertical { x }
    }

    /// Line through `a` and `b`; vertical when their x coordinates are equal.
    ///
    /// Errors with `DegenerateInput` when `a == b`.
    pub fn through(a: &Point, b: &Point) -> Result<Line> {
        if a == b {
            return Err(SymmetryError::degenerate(format!(
                "no unique line through identical points {a}"
            )));
        }
        if a.x() == b.x() {
            return Ok(Line::Vertical { x: a.x().clone() });
        }
        let slope = (b.y() - a.y()).checked_div(&(b.x() - a.x()))?;
        let intercept = a.y() - &(&slope * a.x());
        Ok(Line::Sloped { slope, intercept })
    }

    /// Line through the midpoint of `p1`/`p2` and `centroid`.
    ///
    /// Errors with `DegenerateInput` when the midpoint is the centroid.
    pub fn bisector(p1: &Point, p2: &Point, centroid: &Point) -> Result<Line> {
        let mid = p1.midpoint(p2);
        if &mid == centroid {
            return Err(SymmetryError::degenerate(format!(
                "midpoint of {p1} and {p2} coincides with the centroid"
            )));
        }
        Line::through(&mid, centroid)
    }

    /// Foot of the perpendicular from `p` onto this line.
    pub fn foot(&self, p: &Point) -> Point {
        match self {
            Line::Vertical { x } => Point::new(x.clone(), p.y().clone()),
            Line::Sloped { slope, intercept } => {
                let one = p.precision().int(1);
                // d = (x + (y − b)·m) / (1 + m²); 1 + m² ≥ 1
                let d = &(p.x() + &(&(p.y() - intercept) * slope)) / &(&one + &(slope * slope));
                let fy = &(&d * slope) + intercept;
                Point::new(d, fy)
            }
        }
    }

    /// Mirror image of `p`: twice the perpendicular foot minus `p`.
    ///
    /// Points on the line map to themselves through the same algebra.
    pub fn reflect(&self, p: &Point) -> Point {
        let two = p.precision().int(2);
        match self {
            Line::Vertical { x } => Point::new(&(&two * x) - p.x(), p.y().clone()),
            Line::Sloped { .. } => {
                let foot = self.foot(p);
                Point::new(
                    &(&two * foot.x()) - p.x(),
                    &(&two * foot.y()) - p.y(),
                )
            }
        }
    }

    pub fn contains(&self, p: &Point) -> bool {
        match self {
            Line::Vertical { x } => p.x() == x,
            Line::Sloped { slope, intercept } => p.y() == &(&(slope * p.x()) + intercept),
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Line::Sloped { slope, .. } if slope.is_zero())
    }

    pub fn slope(&self) -> Option<&Decimal> {
        match self {
            Line::Sloped { slope, .. } => Some(slope),
            Line::Vertical { .. } => None,
        }
    }

    pub fn intercept(&self) -> Option<&Decimal> {
        match self {
            Line::Sloped { intercept, .. } => Some(intercept),
            Line::Vertical { .. } => None,
        }
    }

    pub fn vertical_x(&self) -> Option<&Decimal> {
        match self {
            Line::Vertical { x } => Some(x),
            Line::Sloped { .. } => None,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Vertical { x } => write!(f, "x = {x}"),
            Line::Sloped { slope, intercept } if intercept.is_negative() => {
                write!(f, "y = {slope}x - {}", -intercept)
            }
            Line::Sloped { slope, intercept } => write!(f, "y = {slope}x + {intercept}"),
        }
    }
}
