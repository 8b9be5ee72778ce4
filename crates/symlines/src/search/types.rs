//! Data types for candidate generation and verification.
//!
//! Kept small and explicit to make `candidates` and `verify` easy to read.

use std::collections::HashSet;

use crate::error::{Result, SymmetryError};
use crate::geom::{Line, Point};
use crate::num::Precision;

/// Deduplicated input points in first-occurrence order, with a membership index.
///
/// Invariants:
/// - At least two distinct points.
/// - `points` and `index` hold the same elements.
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Point>,
    index: HashSet<Point>,
    duplicates: usize,
}

impl PointSet {
    /// Errors with `InsufficientInput` when fewer than two distinct points remain.
    pub fn new<I: IntoIterator<Item = Point>>(points: I) -> Result<Self> {
        let mut kept = Vec::new();
        let mut index = HashSet::new();
        let mut duplicates = 0usize;
        for p in points {
            if index.insert(p.clone()) {
                kept.push(p);
            } else {
                duplicates += 1;
            }
        }
        if kept.len() < 2 {
            return Err(SymmetryError::InsufficientInput {
                distinct: kept.len(),
            });
        }
        Ok(Self {
            points: kept,
            index,
            duplicates,
        })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a constructed set; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.index.contains(p)
    }

    /// Input points dropped as duplicates.
    #[inline]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.points[0].precision()
    }
}

/// Where a candidate came from (indices into the `PointSet`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CandidateOrigin {
    /// Centroid through point `i`.
    Vertex(usize),
    /// Centroid through the midpoint of points `i` and `j` (`i < j`).
    Bisector(usize, usize),
}

#[derive(Clone, Debug)]
pub struct Candidate {
    pub line: Line,
    pub origin: CandidateOrigin,
}

/// Generator output: deduplicated candidates in generation order.
///
/// `skipped` lists the anchors (points or midpoints) that coincided with the
/// centroid. No candidate was generated for them.
#[derive(Clone, Debug)]
pub struct CandidateSet {
    pub centroid: Point,
    pub candidates: Vec<Candidate>,
    pub skipped: Vec<CandidateOrigin>,
}

/// One verified candidate.
#[derive(Clone, Copy, Debug)]
pub struct Verdict<'a> {
    pub candidate: &'a Candidate,
    pub confirmed: bool,
}

impl<'a> Verdict<'a> {
    #[inline]
    pub fn line(&self) -> &'a Line {
        &self.candidate.line
    }
}

/// Confirmed and rejected candidates, each in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnosis {
    pub confirmed: Vec<Line>,
    pub rejected: Vec<Line>,
}
