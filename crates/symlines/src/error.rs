//! Error type shared by the numeric, geometric and search layers.
//!
//! - `DegenerateInput` is recovered inside candidate generation (the candidate is skipped).
//! - `InsufficientInput`, `InvalidNumber`, `InvalidPrecision` surface to callers.
//! - `DivisionByZero` means an arithmetic invariant broke; it always propagates.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymmetryError {
    /// A line is not uniquely determined by the given points.
    DegenerateInput { reason: String },
    /// Fewer than two distinct points.
    InsufficientInput { distinct: usize },
    DivisionByZero,
    InvalidNumber { input: String },
    InvalidPrecision { digits: u32 },
}

impl SymmetryError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }
}

impl fmt::Display for SymmetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateInput { reason } => write!(f, "degenerate input: {reason}"),
            Self::InsufficientInput { distinct } => write!(
                f,
                "need at least 2 distinct points for symmetry lines, got {distinct}"
            ),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InvalidNumber { input } => write!(f, "invalid decimal literal '{input}'"),
            Self::InvalidPrecision { digits } => {
                write!(f, "precision must be at least 2 digits, got {digits}")
            }
        }
    }
}

impl std::error::Error for SymmetryError {}

pub type Result<T> = std::result::Result<T, SymmetryError>;
