//! Verification: a candidate is a symmetry line iff reflecting the whole point
//! set across it reproduces the set.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::error::Result;
use crate::geom::{Line, Point};

use super::candidates::generate;
use super::types::{Candidate, CandidateOrigin, CandidateSet, Diagnosis, PointSet, Verdict};

/// Reflect every point across `line`; stop at the first image outside the set.
///
/// Confirmed iff all images are members and they are pairwise distinct.
pub fn is_symmetry_line(points: &PointSet, line: &Line) -> bool {
    let mut images: HashSet<Point> = HashSet::with_capacity(points.len());
    for p in points.iter() {
        let image = line.reflect(p);
        if !points.contains(&image) {
            tracing::trace!(%line, point = %p, %image, "image outside the set");
            return false;
        }
        images.insert(image);
    }
    images.len() == points.len()
}

/// Candidate generation plus lazy verification over one point set.
///
/// Candidates are computed once on construction; every `verify`/`find` call
/// starts a fresh pass over them.
#[derive(Clone, Debug)]
pub struct SymmetryFinder {
    points: PointSet,
    candidates: CandidateSet,
}

impl SymmetryFinder {
    pub fn new(points: PointSet) -> Result<Self> {
        let candidates = generate(&points)?;
        Ok(Self { points, candidates })
    }

    /// Deduplicate `points` and generate candidates.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Result<Self> {
        Self::new(PointSet::new(points)?)
    }

    #[inline]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    #[inline]
    pub fn centroid(&self) -> &Point {
        &self.candidates.centroid
    }

    #[inline]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates.candidates
    }

    /// Anchors that coincided with the centroid and produced no candidate.
    #[inline]
    pub fn skipped(&self) -> &[CandidateOrigin] {
        &self.candidates.skipped
    }

    fn judge(&self, candidate: &Candidate) -> bool {
        let confirmed = is_symmetry_line(&self.points, &candidate.line);
        tracing::debug!(
            line = %candidate.line,
            origin = ?candidate.origin,
            confirmed,
            "verdict"
        );
        confirmed
    }

    /// Lazy verdicts in generation order; nothing is verified until pulled.
    pub fn verify(&self) -> Verdicts<'_> {
        Verdicts {
            finder: self,
            next: 0,
        }
    }

    /// Lazy sequence of confirmed symmetry lines.
    pub fn find(&self) -> impl Iterator<Item = &Line> + '_ {
        self.verify().filter(|v| v.confirmed).map(|v| v.line())
    }

    /// Owning variant of `find`.
    pub fn into_lines(self) -> SymmetryLines {
        SymmetryLines {
            finder: self,
            next: 0,
        }
    }

    /// Verify every candidate and split the lines by outcome.
    pub fn diagnose(&self) -> Diagnosis {
        let mut out = Diagnosis::default();
        for v in self.verify() {
            if v.confirmed {
                out.confirmed.push(v.line().clone());
            } else {
                out.rejected.push(v.line().clone());
            }
        }
        out
    }

    /// Verify on `workers` scoped threads (0 = one per available hardware thread).
    ///
    /// Each worker takes a contiguous chunk of candidates and shares the
    /// read-only point set; verdicts come back in generation order.
    pub fn verify_parallel(&self, workers: usize) -> Vec<Verdict<'_>> {
        let cands = self.candidates();
        if cands.is_empty() {
            return Vec::new();
        }
        let workers = match workers {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            w => w,
        };
        let chunk = cands.len().div_ceil(workers);
        tracing::debug!(
            candidates = cands.len(),
            workers,
            chunk,
            "parallel verification"
        );
        std::thread::scope(|s| {
            let handles: Vec<_> = cands
                .chunks(chunk)
                .map(|part| {
                    s.spawn(move || {
                        part.iter()
                            .map(|candidate| Verdict {
                                candidate,
                                confirmed: self.judge(candidate),
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        })
    }
}

/// Lazy verdict sequence returned by `SymmetryFinder::verify`.
#[derive(Clone, Debug)]
pub struct Verdicts<'a> {
    finder: &'a SymmetryFinder,
    next: usize,
}

impl<'a> Iterator for Verdicts<'a> {
    type Item = Verdict<'a>;

    fn next(&mut self) -> Option<Verdict<'a>> {
        let finder = self.finder;
        let candidate = finder.candidates().get(self.next)?;
        self.next += 1;
        Some(Verdict {
            candidate,
            confirmed: finder.judge(candidate),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.finder.candidates().len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Verdicts<'_> {}
impl FusedIterator for Verdicts<'_> {}

/// Owning lazy sequence of confirmed lines (see `find_symmetry_lines`).
#[derive(Clone, Debug)]
pub struct SymmetryLines {
    finder: SymmetryFinder,
    next: usize,
}

impl SymmetryLines {
    pub fn finder(&self) -> &SymmetryFinder {
        &self.finder
    }
}

impl Iterator for SymmetryLines {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        while let Some(candidate) = self.finder.candidates().get(self.next) {
            self.next += 1;
            if self.finder.judge(candidate) {
                return Some(candidate.line.clone());
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.finder.candidates().len() - self.next))
    }
}

impl FusedIterator for SymmetryLines {}
