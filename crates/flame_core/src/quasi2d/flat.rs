//! Uniform field implementation.

use crate::traits::FieldSampler;
use num_traits::Float;
use std::fmt;

/// Field with the same value everywhere.
///
/// Stands in for flow components that are absent or negligible, such as the
/// radial velocity of a one-dimensional stagnation flow.
///
/// # Example
///
/// ```
/// use flame_core::quasi2d::UniformField;
/// use flame_core::traits::FieldSampler;
///
/// let field = UniformField::new(300.0_f64);
/// assert_eq!(field.sample(-5.0, 1e3), 300.0);
/// assert_eq!(field.domain_x(), (f64::NEG_INFINITY, f64::INFINITY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformField<T: Float> {
    value: T,
}

impl<T: Float> UniformField<T> {
    /// Construct a uniform field.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Return the constant value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: Float + Send + Sync + fmt::Debug> FieldSampler<T> for UniformField<T> {
    #[inline]
    fn sample(&self, _x: T, _y: T) -> T {
        self.value
    }

    fn domain_x(&self) -> (T, T) {
        (T::neg_infinity(), T::infinity())
    }

    fn domain_y(&self) -> (T, T) {
        (T::neg_infinity(), T::infinity())
    }
}
