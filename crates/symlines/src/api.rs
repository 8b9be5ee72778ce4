//! Curated entry points.
//!
//! - `find_symmetry_lines`: literal coordinates in, lazy confirmed lines out.
//! - `diagnose`: the same search, returning confirmed and rejected candidates.
//!
//! Callers that already hold `Point`s should use `SymmetryFinder` directly.

pub use crate::error::{Result, SymmetryError};
pub use crate::geom::{Line, Point};
pub use crate::num::{Decimal, Precision};
pub use crate::search::{
    is_symmetry_line, Candidate, CandidateOrigin, Diagnosis, PointSet, SymmetryFinder,
    SymmetryLines, Verdict, Verdicts,
};

/// Parse `(x, y)` literals at `precision` digits into points.
pub fn parse_points<S: AsRef<str>>(points: &[(S, S)], precision: Precision) -> Result<Vec<Point>> {
    points
        .iter()
        .map(|(x, y)| precision.point(x.as_ref(), y.as_ref()))
        .collect()
}

/// All symmetry lines of the point set, produced lazily in generation order.
///
/// Errors before any verification happens: `InvalidPrecision`, `InvalidNumber`
/// for a bad literal, `InsufficientInput` for fewer than two distinct points.
///
/// ```
/// use symlines::api::find_symmetry_lines;
///
/// let rhombus = [("0", "0"), ("4", "0"), ("2", "1"), ("2", "-1")];
/// let lines: Vec<String> = find_symmetry_lines(&rhombus, 28)
///     .unwrap()
///     .map(|l| l.to_string())
///     .collect();
/// assert_eq!(lines, ["y = 0x + 0", "x = 2"]);
/// ```
pub fn find_symmetry_lines<S: AsRef<str>>(
    points: &[(S, S)],
    precision: u32,
) -> Result<SymmetryLines> {
    let prec = Precision::new(precision)?;
    let finder = SymmetryFinder::from_points(parse_points(points, prec)?)?;
    Ok(finder.into_lines())
}

/// Confirmed and rejected candidates for the point set.
pub fn diagnose<S: AsRef<str>>(points: &[(S, S)], precision: u32) -> Result<Diagnosis> {
    let prec = Precision::new(precision)?;
    let finder = SymmetryFinder::from_points(parse_points(points, prec)?)?;
    Ok(finder.diagnose())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_rhombus_axes() {
        let rhombus = [("0", "0"), ("4", "0"), ("2", "1"), ("2", "-1")];
        let lines: Vec<Line> = find_symmetry_lines(&rhombus, 28).unwrap().collect();
        let p = Precision::default();
        assert_eq!(
            lines,
            vec![Line::sloped(p.int(0), p.int(0)), Line::vertical(p.int(2))]
        );
    }

    #[test]
    fn accepts_owned_strings() {
        let pts: Vec<(String, String)> = vec![
            ("1".into(), "2".into()),
            ("3".into(), "4".into()),
        ];
        assert_eq!(find_symmetry_lines(&pts, 28).unwrap().count(), 1);
    }

    #[test]
    fn errors_surface_before_iteration() {
        let pts = [("0", "0"), ("1", "1")];
        assert_eq!(
            find_symmetry_lines(&pts, 1).unwrap_err(),
            SymmetryError::InvalidPrecision { digits: 1 }
        );
        let bad = [("0", "0"), ("1", "one")];
        assert!(matches!(
            find_symmetry_lines(&bad, 28).unwrap_err(),
            SymmetryError::InvalidNumber { .. }
        ));
        let single = [("2", "2"), ("2.0", "2")];
        assert_eq!(
            find_symmetry_lines(&single, 28).unwrap_err(),
            SymmetryError::InsufficientInput { distinct: 1 }
        );
    }

    #[test]
    fn diagnose_splits_candidates() {
        let triangle = [("0", "50"), ("50", "50"), ("50", "0")];
        let diag = diagnose(&triangle, 28).unwrap();
        assert_eq!(diag.confirmed.len(), 1);
        assert_eq!(diag.rejected.len(), 2);
    }
}
