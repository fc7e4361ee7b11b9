//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for grid construction
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`AxisKind`], [`InterpolationError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::{AxisKind, InterpolationError};
