//! Symmetry-line search: candidate generation followed by verification.
//!
//! Every reflection symmetry of a finite set fixes its centroid, so each axis
//! passes through the centroid and either through an input point (points on
//! the axis) or through the midpoint of a mirrored pair. `candidates` builds
//! exactly those lines; `verify` checks them one at a time, lazily.

mod candidates;
mod types;
mod verify;

pub use candidates::{centroid, generate};
pub use types::{Candidate, CandidateOrigin, CandidateSet, Diagnosis, PointSet, Verdict};
pub use verify::{is_symmetry_line, SymmetryFinder, SymmetryLines, Verdicts};
