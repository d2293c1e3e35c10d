//! Input validation errors.

use thiserror::Error;

/// Rejection of a malformed instance, raised before any search state exists.
///
/// These are caller mistakes, never recoverable internally. Degenerate but
/// well-formed inputs (a single city, `f64::INFINITY` entries, a run that
/// finds no tour within its budget) are not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A nested-rows matrix had a row of the wrong length.
    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Expected length (the number of rows).
        expected: usize,
    },
    /// An off-diagonal entry was negative or NaN.
    #[error("cost from {from} to {to} must be non-negative, got {value}")]
    InvalidCost {
        /// Source city index.
        from: usize,
        /// Destination city index.
        to: usize,
        /// The rejected value.
        value: f64,
    },
    /// A diagonal entry was not exactly zero.
    #[error("diagonal entry for city {city} must be zero, got {value}")]
    NonzeroDiagonal {
        /// The city whose self-distance is nonzero.
        city: usize,
        /// The rejected value.
        value: f64,
    },
    /// The start city index does not name a city.
    #[error("start city {start} out of range for {cities} cities")]
    StartOutOfRange {
        /// The rejected start index.
        start: usize,
        /// Number of cities in the instance.
        cities: usize,
    },
    /// The time limit was negative or NaN.
    #[error("time limit must be non-negative seconds, got {seconds}")]
    NegativeTimeLimit {
        /// The rejected limit.
        seconds: f64,
    },
}
