//! Bilinear 2D interpolation with linear extrapolation on non-uniform grids.

use super::field::BilinearField;
use super::grid_axis::GridAxis;
use crate::traits::FieldSampler;
use crate::types::{AxisKind, InterpolationError};
use num_traits::Float;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Bilinear interpolator for 2D grid data.
///
/// Validates a table and its two coordinate axes once, at construction, and
/// afterwards answers `get(x, y)` for any finite point. Inside the grid the
/// result is the piecewise bilinear interpolant; outside it the boundary
/// cells are extended linearly. Used by the flame solver to resample radial
/// and axial flow profiles.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Grid Layout
///
/// `data[j][i] = F(x[i], y[j])`: rows follow the y-axis, columns the x-axis.
///
/// # Thread Safety
///
/// The interpolator is immutable after `setup`. Queries are pure, so a
/// shared reference may be evaluated from any number of threads.
///
/// # Non-finite Queries
///
/// `get` never fails. A NaN or infinite coordinate yields a non-finite
/// result instead of an error. Finite coordinates far outside the grid give
/// a finite result unless the extrapolated value itself exceeds the float
/// range, in which case it overflows to infinity.
///
/// # Example
///
/// ```
/// use flame_core::math::interpolators::BilinearInterpolator;
///
/// let x = [0.0_f64, 0.2, 0.8, 1.0];
/// let y = [-2.0, -1.0, 0.0, 1.0, 2.0];
/// let data = [
///     &[8.00, 8.28, 7.68, 7.00][..],
///     &[2.00, 2.88, 4.08, 4.00][..],
///     &[0.00, 1.08, 2.88, 3.00][..],
///     &[2.00, 2.88, 4.08, 4.00][..],
///     &[8.00, 8.28, 7.68, 7.00][..],
/// ];
///
/// let interp = BilinearInterpolator::setup(&data, &x, &y).unwrap();
/// assert!((interp.get(0.05, 0.0) - 0.27).abs() < 1e-12);
/// assert!((interp.get(0.0, 3.0) - 14.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearInterpolator<T: Float> {
    field: BilinearField<T>,
}

impl<T: Float> BilinearInterpolator<T> {
    /// Construct an interpolator from a table and its coordinate axes.
    ///
    /// # Arguments
    ///
    /// * `data` - Table rows, one per y coordinate, each with one sample per x coordinate
    /// * `x` - Column coordinates (strictly increasing, length >= 2)
    /// * `y` - Row coordinates (strictly increasing, length >= 2)
    ///
    /// # Returns
    ///
    /// * `Ok(BilinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points on an axis
    /// * `Err(InterpolationError::NonMonotonicData)` - Axis not strictly increasing
    /// * `Err(InterpolationError::NonFiniteCoordinate)` - Axis contains NaN or infinity
    /// * `Err(InterpolationError::RowCountMismatch)` / `ColumnCountMismatch` - Table shape mismatch
    ///
    /// # Example
    ///
    /// ```
    /// use flame_core::math::interpolators::BilinearInterpolator;
    /// use flame_core::types::InterpolationError;
    ///
    /// let data = [&[0.0, 1.0, 2.0, 3.0][..], &[1.0, 2.0, 3.0, 4.0][..]];
    /// let result = BilinearInterpolator::setup(&data, &[0.0, 0.2, 0.1, 1.0], &[0.0, 1.0]);
    /// assert!(matches!(result, Err(InterpolationError::NonMonotonicData { .. })));
    /// ```
    pub fn setup<R: AsRef<[T]>>(data: &[R], x: &[T], y: &[T]) -> Result<Self, InterpolationError> {
        Self::from_rows(data, x.to_vec(), y.to_vec())
    }

    /// Construct an interpolator, taking ownership of the axis coordinates.
    pub fn from_rows<R: AsRef<[T]>>(
        data: &[R],
        x: Vec<T>,
        y: Vec<T>,
    ) -> Result<Self, InterpolationError> {
        let x_axis = GridAxis::new(AxisKind::X, x)?;
        let y_axis = GridAxis::new(AxisKind::Y, y)?;
        let field = BilinearField::new(x_axis, y_axis, data)?;
        Ok(Self { field })
    }

    /// Evaluate at `(x, y)`.
    #[inline]
    pub fn get(&self, x: T, y: T) -> T {
        self.field.get(x, y)
    }

    /// Range covered by the x-axis.
    #[inline]
    pub fn domain_x(&self) -> (T, T) {
        self.field.x_axis().bounds()
    }

    /// Range covered by the y-axis.
    #[inline]
    pub fn domain_y(&self) -> (T, T) {
        self.field.y_axis().bounds()
    }

    /// Returns a reference to the underlying field.
    #[inline]
    pub fn field(&self) -> &BilinearField<T> {
        &self.field
    }
}

impl<T: Float + Send + Sync> BilinearInterpolator<T> {
    /// Evaluate on the tensor product of `xs` and `ys`.
    ///
    /// Returns one row per entry of `ys`, in the same layout `setup` accepts.
    /// Rows are evaluated concurrently when the `parallel` feature is enabled.
    pub fn resample(&self, xs: &[T], ys: &[T]) -> Vec<Vec<T>> {
        let row = |&y: &T| xs.iter().map(|&x| self.get(x, y)).collect::<Vec<T>>();

        #[cfg(feature = "parallel")]
        {
            ys.par_iter().map(row).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            ys.iter().map(row).collect()
        }
    }
}

impl<T: Float + Send + Sync + fmt::Debug> FieldSampler<T> for BilinearInterpolator<T> {
    #[inline]
    fn sample(&self, x: T, y: T) -> T {
        self.get(x, y)
    }

    fn domain_x(&self) -> (T, T) {
        BilinearInterpolator::domain_x(self)
    }

    fn domain_y(&self) -> (T, T) {
        BilinearInterpolator::domain_y(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_setup_minimum_grid() {
        let data = [&[0.0, 1.0][..], &[2.0, 3.0][..]];
        let result = BilinearInterpolator::setup(&data, &[0.0, 1.0], &[0.0, 1.0]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_setup_insufficient_x_axis() {
        let data = [&[0.0][..], &[1.0][..]];
        let result = BilinearInterpolator::setup(&data, &[0.0], &[0.0, 1.0]);

        match result.unwrap_err() {
            InterpolationError::InsufficientData { axis, got, need } => {
                assert_eq!(axis, AxisKind::X);
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_setup_insufficient_y_axis() {
        let data = [&[0.0, 1.0][..]];
        let result = BilinearInterpolator::setup(&data, &[0.0, 1.0], &[0.0]);

        match result.unwrap_err() {
            InterpolationError::InsufficientData { axis, .. } => assert_eq!(axis, AxisKind::Y),
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_setup_axes_checked_before_table() {
        // Both the axis and the table are wrong; the axis is reported
        let data = [&[0.0, 1.0][..]];
        let result = BilinearInterpolator::setup(&data, &[1.0, 0.0], &[0.0, 1.0]);
        assert!(matches!(
            result,
            Err(InterpolationError::NonMonotonicData {
                axis: AxisKind::X,
                ..
            })
        ));
    }

    #[test]
    fn test_setup_row_mismatch() {
        let data = [&[0.0, 1.0, 2.0][..], &[2.0, 3.0, 4.0][..]];
        let result = BilinearInterpolator::setup(&data, &[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]);
        assert!(matches!(
            result,
            Err(InterpolationError::RowCountMismatch {
                rows: 2,
                expected: 3
            })
        ));
    }

    // ========================================
    // Evaluation Tests
    // ========================================

    #[test]
    fn test_get_at_corners() {
        let data = [&[1.0, 3.0][..], &[2.0, 4.0][..]];
        let interp = BilinearInterpolator::setup(&data, &[0.0, 1.0], &[0.0, 1.0]).unwrap();

        assert_eq!(interp.get(0.0, 0.0), 1.0);
        assert_eq!(interp.get(1.0, 0.0), 3.0);
        assert_eq!(interp.get(0.0, 1.0), 2.0);
        assert_eq!(interp.get(1.0, 1.0), 4.0);
    }

    #[test]
    fn test_get_multi_cell_plane_is_exact() {
        // Planes are reproduced everywhere, including outside the grid
        let xs = [0.0, 0.5, 2.0];
        let ys = [-1.0, 0.0, 3.0];
        let data: Vec<Vec<f64>> = ys
            .iter()
            .map(|&y| xs.iter().map(|&x| 2.0 * x - y + 1.0).collect())
            .collect();
        let interp = BilinearInterpolator::setup(&data, &xs, &ys).unwrap();

        for (x, y) in [(0.25, -0.5), (1.5, 2.0), (-4.0, 0.5), (3.0, 7.0), (-1.0, -9.0)] {
            assert_relative_eq!(interp.get(x, y), 2.0 * x - y + 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_domain() {
        let data = [&[0.0, 1.0, 2.0][..], &[3.0, 4.0, 5.0][..]];
        let interp = BilinearInterpolator::setup(&data, &[1.0, 2.0, 3.0], &[2.0, 4.0]).unwrap();
        assert_eq!(interp.domain_x(), (1.0, 3.0));
        assert_eq!(interp.domain_y(), (2.0, 4.0));
    }

    #[test]
    fn test_resample_matches_get() {
        let data = [&[0.0, 1.0][..], &[2.0, 5.0][..]];
        let interp = BilinearInterpolator::setup(&data, &[0.0, 1.0], &[0.0, 1.0]).unwrap();

        let xs = [-0.5, 0.25, 1.5];
        let ys = [0.0, 0.5];
        let grid = interp.resample(&xs, &ys);

        assert_eq!(grid.len(), ys.len());
        for (row, &y) in grid.iter().zip(ys.iter()) {
            assert_eq!(row.len(), xs.len());
            for (&value, &x) in row.iter().zip(xs.iter()) {
                assert_eq!(value, interp.get(x, y));
            }
        }
    }

    #[test]
    fn test_sampler_trait_object() {
        let data = [&[0.0, 1.0][..], &[2.0, 3.0][..]];
        let interp = BilinearInterpolator::setup(&data, &[0.0, 1.0], &[0.0, 1.0]).unwrap();
        let sampler: &dyn FieldSampler<f64> = &interp;
        assert_relative_eq!(sampler.sample(0.5, 0.5), 1.5);
        assert_eq!(sampler.domain_y(), (0.0, 1.0));
    }

    #[test]
    fn test_shared_across_threads() {
        let data = [&[0.0, 1.0][..], &[2.0, 3.0][..]];
        let interp = BilinearInterpolator::setup(&data, &[0.0, 1.0], &[0.0, 1.0]).unwrap();
        let expected = interp.get(0.3, 0.7);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| interp.get(0.3, 0.7))).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_with_f32() {
        let row0: [f32; 2] = [0.0, 1.0];
        let row1: [f32; 2] = [2.0, 3.0];
        let data: [&[f32]; 2] = [&row0[..], &row1[..]];

        let interp = BilinearInterpolator::setup(&data, &[0.0_f32, 1.0], &[0.0_f32, 1.0]).unwrap();
        let z = interp.get(0.5_f32, 0.5_f32);
        assert!((z - 1.5).abs() < 1e-6);
    }
}
