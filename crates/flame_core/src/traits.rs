//! Sampling seam between field representations and the solver.

use num_traits::Float;

/// A scalar field on a 2D plane that can be evaluated at any point.
///
/// Implementations must be total: every finite `(x, y)` has a value, and
/// evaluation never mutates the sampler. `Send + Sync` lets one sampler be
/// shared by concurrent solver threads.
///
/// # Example
///
/// ```
/// use flame_core::math::interpolators::BilinearInterpolator;
/// use flame_core::traits::FieldSampler;
///
/// fn midpoint<S: FieldSampler<f64>>(field: &S) -> f64 {
///     let (x0, x1) = field.domain_x();
///     let (y0, y1) = field.domain_y();
///     field.sample(0.5 * (x0 + x1), 0.5 * (y0 + y1))
/// }
///
/// let data = [&[0.0, 2.0][..], &[2.0, 4.0][..]];
/// let interp = BilinearInterpolator::setup(&data, &[0.0, 1.0], &[0.0, 1.0]).unwrap();
/// assert!((midpoint(&interp) - 2.0).abs() < 1e-12);
/// ```
pub trait FieldSampler<T: Float>: Send + Sync + std::fmt::Debug {
    /// Evaluate the field at `(x, y)`.
    fn sample(&self, x: T, y: T) -> T;

    /// Range of `x` covered by data. Unbounded samplers return infinities.
    fn domain_x(&self) -> (T, T);

    /// Range of `y` covered by data. Unbounded samplers return infinities.
    fn domain_y(&self) -> (T, T);
}
