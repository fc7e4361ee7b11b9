//! # flame_core: Grid Sampling Foundation for the Quasi-2D Flame Solver
//!
//! ## Layer 1 (Foundation) Role
//!
//! flame_core is the bottom layer of the workspace, providing:
//! - Strictly increasing coordinate axes with cell location (`math::interpolators::GridAxis`)
//! - Bilinear evaluation with linear extrapolation on non-uniform grids
//!   (`math::interpolators::BilinearInterpolator`)
//! - The `FieldSampler` seam used by the solver (`traits`)
//! - Named bundles of axisymmetric flow fields (`quasi2d`)
//! - Error types: `InterpolationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - rayon: Concurrent resampling (optional, `parallel` feature)
//! - serde: Serialisation support (optional, `serde` feature)
//!
//! ## Usage Examples
//!
//! ```rust
//! use flame_core::math::interpolators::BilinearInterpolator;
//!
//! let x = [0.0_f64, 0.2, 0.8, 1.0];
//! let y = [-1.0, 0.0, 1.0];
//! let data = [
//!     &[2.00, 2.88, 4.08, 4.00][..],
//!     &[0.00, 1.08, 2.88, 3.00][..],
//!     &[2.00, 2.88, 4.08, 4.00][..],
//! ];
//!
//! let interp = BilinearInterpolator::setup(&data, &x, &y).unwrap();
//! assert!((interp.get(0.4, -1.0) - 3.28).abs() < 1e-12);
//!
//! // Queries outside the grid extend the boundary cell's slope
//! assert!((interp.get(-0.2, 0.0) + 1.08).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Rayon-backed `BilinearInterpolator::resample`
//! - `serde` (default): Serialisation for `AxisKind` and `InterpolationError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod quasi2d;
pub mod traits;
pub mod types;
