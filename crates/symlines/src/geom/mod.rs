//! Exact 2D points and lines over `Decimal`.
//!
//! - `Point`: immutable coordinate pair with normalized equality/hash.
//! - `Line`: sloped (`y = m·x + b`) or vertical (`x = c`), with `through`,
//!   `bisector` and `reflect`.
//!
//! All arithmetic stays in `Decimal`; `Point::approx` is the only exit to `f64`.

mod line;
mod point;

pub use line::Line;
pub use point::Point;

#[cfg(test)]
mod tests;
