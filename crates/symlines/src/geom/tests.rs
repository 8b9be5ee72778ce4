use super::*;
use crate::error::SymmetryError;
use crate::num::Precision;
use proptest::prelude::*;

fn pt(x: &str, y: &str) -> Point {
    Precision::default().point(x, y).unwrap()
}

fn sloped(m: &str, b: &str) -> Line {
    let p = Precision::default();
    Line::sloped(p.decimal(m).unwrap(), p.decimal(b).unwrap())
}

fn vertical(x: &str) -> Line {
    Line::vertical(Precision::default().decimal(x).unwrap())
}

#[test]
fn through_sloped_and_vertical() {
    let line = Line::through(&pt("4", "1"), &pt("2", "-2")).unwrap();
    assert_eq!(line, sloped("1.5", "-5"));
    assert!(!line.is_vertical());
    assert_eq!(line.to_string(), "y = 1.5x - 5");

    let v = Line::through(&pt("4", "1"), &pt("4", "5")).unwrap();
    assert!(v.is_vertical());
    assert_eq!(v.vertical_x(), Some(&Precision::default().int(4)));
    assert_eq!(v.slope(), None);
    assert_eq!(v.to_string(), "x = 4");
}

#[test]
fn through_identical_points_is_degenerate() {
    let err = Line::through(&pt("1.1", "2.2"), &pt("1.10", "2.20")).unwrap_err();
    assert!(matches!(err, SymmetryError::DegenerateInput { .. }));
}

#[test]
fn point_equality_is_ordered_and_normalized() {
    assert_ne!(pt("1", "1"), pt("1", "2"));
    assert_ne!(pt("1", "2"), pt("2", "1"));
    assert_eq!(pt("1.1", "2.1"), pt("1.10", "2.100"));
    assert_eq!(pt("1", "2").to_string(), "(1, 2)");
}

#[test]
fn line_equality_follows_representation() {
    assert_ne!(sloped("1", "1"), sloped("1", "2"));
    assert_ne!(sloped("1", "1"), sloped("2", "1"));
    assert_eq!(sloped("1.1", "2.1"), sloped("1.10", "2.10"));
    assert_eq!(vertical("3"), vertical("3.0"));
    assert_ne!(vertical("3"), vertical("5"));
    // x = 0 and y = 0 share the number but not the form
    assert_ne!(vertical("0"), sloped("0", "0"));
}

#[test]
fn midpoints() {
    assert_eq!(pt("4", "1").midpoint(&pt("8", "2")), pt("6", "1.5"));
    assert_eq!(pt("1", "2").midpoint(&pt("2", "2")), pt("1.5", "2.0"));
}

#[test]
fn bisector_runs_through_midpoint_and_centroid() {
    let line = Line::bisector(&pt("0", "0"), &pt("0", "2"), &pt("2", "0")).unwrap();
    assert_eq!(line, sloped("-0.5", "1"));
    let err = Line::bisector(&pt("0", "0"), &pt("2", "2"), &pt("1", "1")).unwrap_err();
    assert!(matches!(err, SymmetryError::DegenerateInput { .. }));
}

#[test]
fn horizontal_lines() {
    assert!(sloped("0", "8").is_horizontal());
    assert!(sloped("0.000", "0").is_horizontal());
    assert!(!sloped("0.1", "0").is_horizontal());
    assert!(!vertical("0").is_horizontal());
}

#[test]
fn perpendicular_feet() {
    assert_eq!(sloped("0", "5").foot(&pt("4", "-10")), pt("4", "5"));
    assert_eq!(vertical("15.5").foot(&pt("4", "-10")), pt("15.5", "-10"));
    let diag = sloped("1", "2");
    assert_eq!(diag.foot(&pt("1", "1")), pt("0", "2"));
    assert_eq!(diag.foot(&pt("2", "2")), pt("1", "3"));
}

#[test]
fn reflections() {
    assert_eq!(sloped("0", "25").reflect(&pt("25", "20")), pt("25", "30"));
    assert_eq!(vertical("26").reflect(&pt("25", "30")), pt("27", "30"));
    assert_eq!(pt("1", "1").reflect(&sloped("1", "2")), pt("-1", "3"));
    // points on the line stay put
    assert_eq!(sloped("0", "25").reflect(&pt("25", "25")), pt("25", "25"));
    assert_eq!(vertical("4.3").reflect(&pt("4.3", "30")), pt("4.3", "30"));
}

#[test]
fn containment() {
    let line = sloped("-0.5", "50");
    assert!(line.contains(&pt("20", "40")));
    assert!(!line.contains(&pt("20", "41")));
    assert!(vertical("2").contains(&pt("2", "-7")));
}

#[test]
fn approx_view() {
    let v = pt("0.25", "-3").approx();
    assert!((v.x - 0.25).abs() < 1e-15);
    assert!((v.y + 3.0).abs() < 1e-15);
}

// Slopes whose `1 + m²` divides every decimal exactly, so reflections stay exact.
const EXACT_SLOPES: &[&str] = &["0", "1", "-1", "2", "-2", "0.5", "-0.5", "3", "-3", "7", "-7"];

fn exact_line() -> impl Strategy<Value = Line> {
    let prec = Precision::default();
    prop_oneof![
        (-50i64..50).prop_map(move |c| Line::vertical(prec.int(c))),
        (prop::sample::select(EXACT_SLOPES), -50i64..50).prop_map(move |(m, b)| {
            Line::sloped(prec.decimal(m).unwrap(), prec.int(b))
        }),
    ]
}

proptest! {
    #[test]
    fn reflection_is_an_involution(line in exact_line(), x in -100i64..100, y in -100i64..100) {
        let prec = Precision::default();
        let p = Point::new(prec.int(x), prec.int(y));
        prop_assert_eq!(line.reflect(&line.reflect(&p)), p);
    }

    #[test]
    fn points_on_the_line_are_fixed(line in exact_line(), t in -100i64..100) {
        let prec = Precision::default();
        let p = match &line {
            Line::Vertical { x } => Point::new(x.clone(), prec.int(t)),
            Line::Sloped { slope, intercept } => {
                let x = prec.int(t);
                let y = &(slope * &x) + intercept;
                Point::new(x, y)
            }
        };
        prop_assert!(line.contains(&p));
        prop_assert_eq!(line.reflect(&p), p);
    }

    #[test]
    fn reflection_preserves_the_foot(line in exact_line(), x in -100i64..100, y in -100i64..100) {
        let prec = Precision::default();
        let p = Point::new(prec.int(x), prec.int(y));
        let q = line.reflect(&p);
        prop_assert_eq!(line.foot(&q), line.foot(&p));
        prop_assert!(line.contains(&line.foot(&p)));
    }
}
