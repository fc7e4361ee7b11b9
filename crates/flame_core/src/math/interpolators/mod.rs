//! Interpolation on non-uniform rectangular grids.
//!
//! This module provides the grid resampling used by the quasi-2D flame
//! solver, generic over `T: num_traits::Float`.
//!
//! ## Components
//!
//! - [`GridAxis`]: Strictly increasing coordinates with cell location
//! - [`CellLocation`]: Cell index plus fractional offset returned by [`GridAxis::locate`]
//! - [`BilinearField`]: Row-major sample table over two axes
//! - [`BilinearInterpolator`]: Validating facade (`setup`, then `get`)
//!
//! ## Extrapolation
//!
//! Interpolation and extrapolation share one evaluation path. A query
//! outside an axis range is located in the boundary cell with a fractional
//! offset outside `[0, 1]`, so the field continues with that cell's slope.
//! Nothing is clamped and no query is rejected.
//!
//! ## Example
//!
//! ```
//! use flame_core::math::interpolators::BilinearInterpolator;
//!
//! let x = [0.0_f64, 1.0];
//! let y = [0.0, 2.0];
//! let data = [&[0.0, 1.0][..], &[2.0, 3.0][..]];
//!
//! let interp = BilinearInterpolator::setup(&data, &x, &y).unwrap();
//! assert!((interp.get(0.5, 1.0) - 1.5).abs() < 1e-12);
//! assert!((interp.get(2.0, 0.0) - 2.0).abs() < 1e-12);
//! ```

mod bilinear;
mod field;
mod grid_axis;

// Re-export public types at module level
pub use bilinear::BilinearInterpolator;
pub use field::BilinearField;
pub use grid_axis::{CellLocation, GridAxis};
