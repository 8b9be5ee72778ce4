//! JSON records for line output and the plot document.
//!
//! Decimals are emitted as strings in their normalized form; the plot geometry
//! (point coordinates, bounds, segments) is approximate `f64` for renderers.

use serde::Serialize;
use symlines::geom::{Line, Point};
use symlines::search::Verdict;

/// Fractional margin added on each side of the point bounding box.
pub const MARGIN: f64 = 0.05;

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineRecord {
    Sloped {
        slope: String,
        intercept: String,
        text: String,
    },
    Vertical {
        x: String,
        text: String,
    },
}

impl From<&Line> for LineRecord {
    fn from(line: &Line) -> Self {
        match line {
            Line::Sloped { slope, intercept } => LineRecord::Sloped {
                slope: slope.to_string(),
                intercept: intercept.to_string(),
                text: line.to_string(),
            },
            Line::Vertical { x } => LineRecord::Vertical {
                x: x.to_string(),
                text: line.to_string(),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

#[derive(Debug, Serialize)]
pub struct CandidateRecord {
    pub confirmed: bool,
    pub line: LineRecord,
    /// Endpoints spanning the data range (not the padded bounds).
    pub segment: [[f64; 2]; 2],
}

#[derive(Debug, Serialize)]
pub struct PlotDocument {
    pub precision: u32,
    pub points: Vec<[f64; 2]>,
    pub centroid: [f64; 2],
    pub bounds: Bounds,
    pub candidates: Vec<CandidateRecord>,
}

/// Data range of the points; `None` for an empty slice.
fn data_range(points: &[Point]) -> Option<Bounds> {
    let first = points.first()?.approx();
    let init = Bounds {
        x: [first.x, first.x],
        y: [first.y, first.y],
    };
    Some(points.iter().skip(1).fold(init, |b, p| {
        let v = p.approx();
        Bounds {
            x: [b.x[0].min(v.x), b.x[1].max(v.x)],
            y: [b.y[0].min(v.y), b.y[1].max(v.y)],
        }
    }))
}

/// Pad a range by `MARGIN` of its extent on both sides.
pub fn padded(range: Bounds) -> Bounds {
    let dx = (range.x[1] - range.x[0]).abs() * MARGIN;
    let dy = (range.y[1] - range.y[0]).abs() * MARGIN;
    Bounds {
        x: [range.x[0] - dx, range.x[1] + dx],
        y: [range.y[0] - dy, range.y[1] + dy],
    }
}

fn segment(line: &Line, range: Bounds) -> [[f64; 2]; 2] {
    match line {
        Line::Vertical { x } => {
            let x = x.to_f64();
            [[x, range.y[0]], [x, range.y[1]]]
        }
        Line::Sloped { slope, intercept } => {
            let (m, b) = (slope.to_f64(), intercept.to_f64());
            [
                [range.x[0], m * range.x[0] + b],
                [range.x[1], m * range.x[1] + b],
            ]
        }
    }
}

/// Assemble the plot document from the deduplicated points and every verdict.
pub fn document(
    points: &[Point],
    centroid: &Point,
    verdicts: &[Verdict<'_>],
    precision: u32,
) -> PlotDocument {
    let c = centroid.approx();
    let range = data_range(points).unwrap_or(Bounds {
        x: [c.x, c.x],
        y: [c.y, c.y],
    });
    PlotDocument {
        precision,
        points: points
            .iter()
            .map(|p| {
                let v = p.approx();
                [v.x, v.y]
            })
            .collect(),
        centroid: [c.x, c.y],
        bounds: padded(range),
        candidates: verdicts
            .iter()
            .map(|v| CandidateRecord {
                confirmed: v.confirmed,
                line: v.line().into(),
                segment: segment(v.line(), range),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symlines::num::Precision;
    use symlines::search::SymmetryFinder;

    fn rhombus() -> SymmetryFinder {
        let p = Precision::default();
        let pts = [("0", "0"), ("4", "0"), ("2", "1"), ("2", "-1")]
            .iter()
            .map(|(x, y)| p.point(x, y).unwrap())
            .collect::<Vec<_>>();
        SymmetryFinder::from_points(pts).unwrap()
    }

    #[test]
    fn bounds_get_five_percent_margin() {
        let b = padded(Bounds {
            x: [0.0, 4.0],
            y: [-1.0, 1.0],
        });
        assert!((b.x[0] + 0.2).abs() < 1e-12 && (b.x[1] - 4.2).abs() < 1e-12);
        assert!((b.y[0] + 1.1).abs() < 1e-12 && (b.y[1] - 1.1).abs() < 1e-12);
    }

    #[test]
    fn document_lists_every_candidate() {
        let f = rhombus();
        let verdicts: Vec<_> = f.verify().collect();
        let doc = document(f.points().points(), f.centroid(), &verdicts, 28);
        assert_eq!(doc.points.len(), 4);
        assert_eq!(doc.candidates.len(), f.candidates().len());
        let confirmed: Vec<_> = doc.candidates.iter().filter(|c| c.confirmed).collect();
        assert_eq!(confirmed.len(), 2);
        assert_eq!(
            confirmed[1].line,
            LineRecord::Vertical {
                x: "2".into(),
                text: "x = 2".into()
            }
        );
        assert_eq!(confirmed[1].segment, [[2.0, -1.0], [2.0, 1.0]]);
        assert_eq!(confirmed[0].segment, [[0.0, 0.0], [4.0, 0.0]]);
    }

    #[test]
    fn records_serialize_with_a_kind_tag() {
        let p = Precision::default();
        let line = Line::sloped(p.decimal("-1.50").unwrap(), p.int(3));
        let json = serde_json::to_value(LineRecord::from(&line)).unwrap();
        assert_eq!(json["kind"], "sloped");
        assert_eq!(json["slope"], "-1.5");
        assert_eq!(json["text"], "y = -1.5x + 3");
    }
}
