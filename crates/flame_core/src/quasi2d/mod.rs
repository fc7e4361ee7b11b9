//! Quasi-two-dimensional flow description.
//!
//! This module provides:
//! - [`FlowField`]: Axial velocity, radial velocity and unburned temperature on `(r, z)`
//! - [`UniformField`]: Constant sampler for absent components
//!
//! Gridded components are [`BilinearInterpolator`](crate::math::interpolators::BilinearInterpolator)s,
//! so the solver can query the flow anywhere, including outside the tabulated region.

mod flat;
mod flow_field;

pub use flat::UniformField;
pub use flow_field::FlowField;
