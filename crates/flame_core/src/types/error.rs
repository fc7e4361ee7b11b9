//! Error types for structured error handling.
//!
//! This module provides:
//! - `AxisKind`: Identifies the grid axis an error refers to
//! - `InterpolationError`: Errors from grid and interpolator construction
//!
//! Evaluation never fails: once an interpolator exists every finite query has
//! a value. All errors here are configuration errors raised at construction.

use std::fmt;
use thiserror::Error;

/// Grid axis identifier used in error context.
///
/// # Examples
/// ```
/// use flame_core::types::AxisKind;
///
/// assert_eq!(format!("{}", AxisKind::X), "x");
/// assert_eq!(format!("{}", AxisKind::Y), "y");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisKind {
    /// Column axis of the data table
    X,
    /// Row axis of the data table
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => write!(f, "x"),
            AxisKind::Y => write!(f, "y"),
        }
    }
}

/// Interpolation-related errors.
///
/// Provides structured error handling for grid construction with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InsufficientData`: Axis too short to define a slope
/// - `NonMonotonicData`: Axis not strictly increasing
/// - `NonFiniteCoordinate`: Axis contains NaN or an infinity
/// - `RowCountMismatch`: Table row count differs from the y-axis length
/// - `ColumnCountMismatch`: A table row differs from the x-axis length
///
/// # Examples
/// ```
/// use flame_core::types::{AxisKind, InterpolationError};
///
/// let err = InterpolationError::NonMonotonicData { axis: AxisKind::X, index: 2 };
/// assert!(format!("{}", err).contains("not strictly increasing"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Insufficient data points on an axis.
    #[error("Insufficient data points on {axis}-axis: got {got}, need at least {need}")]
    InsufficientData {
        /// Offending axis
        axis: AxisKind,
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Axis is not strictly increasing.
    #[error("{axis}-axis is not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Offending axis
        axis: AxisKind,
        /// Index of the first coordinate not greater than its predecessor
        index: usize,
    },

    /// Axis contains a NaN or infinite coordinate.
    #[error("{axis}-axis has a non-finite coordinate at index {index}")]
    NonFiniteCoordinate {
        /// Offending axis
        axis: AxisKind,
        /// Index of the non-finite coordinate
        index: usize,
    },

    /// Table row count does not match the y-axis length.
    #[error("Table rows ({rows}) must match y-axis length ({expected})")]
    RowCountMismatch {
        /// Number of rows provided
        rows: usize,
        /// Length of the y-axis
        expected: usize,
    },

    /// Table row length does not match the x-axis length.
    #[error("Table row {row} length ({columns}) must match x-axis length ({expected})")]
    ColumnCountMismatch {
        /// Index of the offending row
        row: usize,
        /// Number of columns in that row
        columns: usize,
        /// Length of the x-axis
        expected: usize,
    },
}
