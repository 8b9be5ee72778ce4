//! Point input: a CSV file (first two columns) or whitespace-separated
//! `x,y[,...]` tokens.
//!
//! Both paths keep coordinates as text until `Precision::point` parses them,
//! so decimal literals stay exact.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use polars::prelude::*;
use symlines::geom::Point;
use symlines::num::Precision;

/// Raw coordinate literals, one pair per input point.
pub type Literals = Vec<(String, String)>;

/// Read the first two columns of a CSV file as strings.
pub fn read_csv(path: &Path, header: bool) -> Result<Literals> {
    // A zero-row schema inference keeps every column as `String`.
    let df = LazyCsvReader::new(path)
        .with_has_header(header)
        .with_infer_schema_length(Some(0))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input csv");
    if df.width() < 2 {
        return Err(anyhow!(
            "{}: expected at least two columns, found {}",
            path.display(),
            df.width()
        ));
    }
    let xs = df
        .select_at_idx(0)
        .ok_or_else(|| anyhow!("missing x column"))?
        .str()?;
    let ys = df
        .select_at_idx(1)
        .ok_or_else(|| anyhow!("missing y column"))?
        .str()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, pair)| match pair {
            (Some(x), Some(y)) => Ok((x.trim().to_string(), y.trim().to_string())),
            _ => Err(anyhow!("{}: row {row} has an empty coordinate", path.display())),
        })
        .collect()
}

/// Split on whitespace; each token is `x,y` with extra components ignored.
pub fn parse_tokens(text: &str) -> Result<Literals> {
    text.split_whitespace()
        .map(|token| {
            let mut parts = token.split(',');
            match (parts.next(), parts.next()) {
                (Some(x), Some(y)) => Ok((x.to_string(), y.to_string())),
                _ => Err(anyhow!("token {token:?} is not of the form x,y")),
            }
        })
        .collect()
}

/// Parse literals at `prec`, naming the offending entry on failure.
pub fn to_points(literals: &[(String, String)], prec: Precision) -> Result<Vec<Point>> {
    literals
        .iter()
        .enumerate()
        .map(|(i, (x, y))| prec.point(x, y).with_context(|| format!("point #{i} ({x}, {y})")))
        .collect()
}
