//! Reflection symmetry lines of finite 2D point sets.
//!
//! Coordinates are exact decimals (`num::Decimal`) at a caller-chosen
//! precision; equality and hashing compare one digit coarser so rounding noise
//! in the last digit does not split equal values.
//!
//! Layout
//! - `num`: `Decimal` and its `Precision` factory.
//! - `geom`: `Point` and `Line` (sloped or vertical), reflection.
//! - `search`: centroid, candidate generation, lazy verification.
//! - `api`: curated entry points (`find_symmetry_lines`, `diagnose`).
//!
//! Logging goes through `tracing`; the library never installs a subscriber.

pub mod api;
pub mod error;
pub mod geom;
pub mod num;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{diagnose, find_symmetry_lines};
pub use error::{Result, SymmetryError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{diagnose, find_symmetry_lines, parse_points};
    pub use crate::error::{Result, SymmetryError};
    pub use crate::geom::{Line, Point};
    pub use crate::num::{Decimal, Precision};
    pub use crate::search::{Diagnosis, PointSet, SymmetryFinder};
}
