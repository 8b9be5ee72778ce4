//! Candidate lines: every symmetry line passes through the centroid and either
//! through an input point or through the midpoint of a mirrored pair.

use std::collections::HashSet;

use crate::error::{Result, SymmetryError};
use crate::geom::{Line, Point};
use crate::num::Decimal;

use super::types::{Candidate, CandidateOrigin, CandidateSet, PointSet};

/// Mean of the coordinates, summed in set order.
pub fn centroid(points: &PointSet) -> Point {
    let prec = points.precision();
    let mut sx = Decimal::zero(prec);
    let mut sy = Decimal::zero(prec);
    for p in points.iter() {
        sx = &sx + p.x();
        sy = &sy + p.y();
    }
    let n = prec.int(points.len() as i64);
    Point::new(&sx / &n, &sy / &n)
}

/// Centroid-through-point lines, then centroid-through-midpoint lines for every
/// pair `i < j`, deduplicated keeping the first occurrence.
///
/// Anchors that coincide with the centroid fix no direction; they are recorded
/// in `skipped` and get no candidate.
pub fn generate(points: &PointSet) -> Result<CandidateSet> {
    let centroid = centroid(points);
    let pts = points.points();
    let mut seen: HashSet<Line> = HashSet::new();
    let mut candidates = Vec::new();
    let mut skipped = Vec::new();

    let mut offer = |built: Result<Line>, origin: CandidateOrigin| -> Result<()> {
        match built {
            Ok(line) => {
                if seen.insert(line.clone()) {
                    tracing::trace!(%line, ?origin, "candidate");
                    candidates.push(Candidate { line, origin });
                }
                Ok(())
            }
            Err(SymmetryError::DegenerateInput { reason }) => {
                tracing::debug!(
                    ?origin,
                    reason = %reason,
                    "anchor coincides with the centroid; skipped"
                );
                skipped.push(origin);
                Ok(())
            }
            Err(e) => Err(e),
        }
    };

    for (i, p) in pts.iter().enumerate() {
        offer(Line::through(p, &centroid), CandidateOrigin::Vertex(i))?;
    }
    for i in 0..pts.len() {
        for j in i + 1..pts.len() {
            offer(
                Line::bisector(&pts[i], &pts[j], &centroid),
                CandidateOrigin::Bisector(i, j),
            )?;
        }
    }

    tracing::debug!(
        points = pts.len(),
        candidates = candidates.len(),
        skipped = skipped.len(),
        %centroid,
        "generated candidate lines"
    );
    Ok(CandidateSet {
        centroid,
        candidates,
        skipped,
    })
}
