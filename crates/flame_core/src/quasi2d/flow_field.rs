//! Axisymmetric flow field on the `(r, z)` plane.

use super::flat::UniformField;
use crate::traits::FieldSampler;
use num_traits::Float;
use std::fmt;
use std::sync::Arc;

/// Named bundle of the flow quantities the quasi-2D correction samples.
///
/// Every component maps `(r, z)` to a scalar, with the radial coordinate on
/// the sampler's x-axis and the axial coordinate on its y-axis. Components
/// are shared behind `Arc`, so cloning a `FlowField` is cheap and clones can
/// be evaluated concurrently.
///
/// # Example
///
/// ```
/// use flame_core::math::interpolators::BilinearInterpolator;
/// use flame_core::quasi2d::{FlowField, UniformField};
///
/// let r = [0.0_f64, 0.01];
/// let z = [0.0, 0.05, 0.1];
/// let vz = [&[2.0, 1.8][..], &[1.0, 0.9][..], &[0.0, 0.0][..]];
/// let axial = BilinearInterpolator::setup(&vz, &r, &z).unwrap();
///
/// let flow = FlowField::new(axial, UniformField::new(0.0), UniformField::new(300.0));
/// assert!((flow.axial_velocity(0.0, 0.025) - 1.5).abs() < 1e-12);
/// assert_eq!(flow.domain_z(), (0.0, 0.1));
/// ```
#[derive(Clone)]
pub struct FlowField<T: Float> {
    axial_velocity: Arc<dyn FieldSampler<T>>,
    radial_velocity: Arc<dyn FieldSampler<T>>,
    temperature: Arc<dyn FieldSampler<T>>,
}

impl<T: Float + Send + Sync + fmt::Debug + 'static> FlowField<T> {
    /// Bundle the three flow components.
    ///
    /// # Arguments
    ///
    /// * `axial_velocity` - Axial velocity `v_z(r, z)`
    /// * `radial_velocity` - Radial velocity `v_r(r, z)`
    /// * `temperature` - Unburned gas temperature `T_u(r, z)`
    pub fn new(
        axial_velocity: impl FieldSampler<T> + 'static,
        radial_velocity: impl FieldSampler<T> + 'static,
        temperature: impl FieldSampler<T> + 'static,
    ) -> Self {
        Self {
            axial_velocity: Arc::new(axial_velocity),
            radial_velocity: Arc::new(radial_velocity),
            temperature: Arc::new(temperature),
        }
    }

    /// Flow with constant components everywhere.
    pub fn uniform(axial_velocity: T, radial_velocity: T, temperature: T) -> Self {
        Self::new(
            UniformField::new(axial_velocity),
            UniformField::new(radial_velocity),
            UniformField::new(temperature),
        )
    }
}

impl<T: Float> FlowField<T> {
    /// Axial velocity at `(r, z)`.
    #[inline]
    pub fn axial_velocity(&self, r: T, z: T) -> T {
        self.axial_velocity.sample(r, z)
    }

    /// Radial velocity at `(r, z)`.
    #[inline]
    pub fn radial_velocity(&self, r: T, z: T) -> T {
        self.radial_velocity.sample(r, z)
    }

    /// Unburned gas temperature at `(r, z)`.
    #[inline]
    pub fn temperature(&self, r: T, z: T) -> T {
        self.temperature.sample(r, z)
    }

    /// Radial range covered by every component's data.
    pub fn domain_r(&self) -> (T, T) {
        self.intersect(|s| s.domain_x())
    }

    /// Axial range covered by every component's data.
    pub fn domain_z(&self) -> (T, T) {
        self.intersect(|s| s.domain_y())
    }

    fn intersect(&self, domain: impl Fn(&dyn FieldSampler<T>) -> (T, T)) -> (T, T) {
        [&self.axial_velocity, &self.radial_velocity, &self.temperature]
            .into_iter()
            .map(|s| domain(s.as_ref()))
            .fold((T::neg_infinity(), T::infinity()), |(lo, hi), (a, b)| {
                (lo.max(a), hi.min(b))
            })
    }
}

impl<T: Float> fmt::Debug for FlowField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowField")
            .field("axial_velocity", &self.axial_velocity)
            .field("radial_velocity", &self.radial_velocity)
            .field("temperature", &self.temperature)
            .finish()
    }
}
