//! Numerical building blocks.
//!
//! - `interpolators`: Non-uniform grid axes and bilinear field evaluation

pub mod interpolators;
