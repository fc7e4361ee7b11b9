//! Rectangular sample table over two grid axes.

use super::grid_axis::GridAxis;
use crate::types::InterpolationError;
use num_traits::Float;

/// Scalar samples on a rectangular, non-uniform grid.
///
/// # Grid Layout
///
/// Row `j` holds the samples at `y_axis[j]`, column `i` the samples at
/// `x_axis[i]`, so `value_at(j, i) = F(x_i, y_j)`. Storage is a flat
/// row-major `Vec`.
///
/// # Evaluation
///
/// ```text
/// F(x, y) = (1-tx)(1-ty) F[j,i] + tx(1-ty) F[j,i+1]
///         + (1-tx) ty F[j+1,i] + tx ty F[j+1,i+1]
/// ```
///
/// with `(i, tx)` and `(j, ty)` from [`GridAxis::locate`]. Fractions are
/// never clamped: outside the grid the same expression extends the boundary
/// cell's slope, and with both coordinates outside the two linear extensions
/// multiply.
///
/// [`get`](Self::get) computes this polynomial as two linear steps along y
/// followed by one along x, each taken from the nearer cell node. Grid nodes
/// are reproduced exactly and a far query stays finite as long as the value
/// it extrapolates to is representable.
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearField<T: Float> {
    x_axis: GridAxis<T>,
    y_axis: GridAxis<T>,
    values: Vec<T>,
}

impl<T: Float> BilinearField<T> {
    /// Build a field from validated axes and a row-major table.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::RowCountMismatch)` - `rows.len() != y_axis.num_points()`
    /// * `Err(InterpolationError::ColumnCountMismatch)` - A row length differs from `x_axis.num_points()`
    pub fn new<R: AsRef<[T]>>(
        x_axis: GridAxis<T>,
        y_axis: GridAxis<T>,
        rows: &[R],
    ) -> Result<Self, InterpolationError> {
        let nx = x_axis.num_points();
        let ny = y_axis.num_points();

        if rows.len() != ny {
            return Err(InterpolationError::RowCountMismatch {
                rows: rows.len(),
                expected: ny,
            });
        }

        let mut values = Vec::with_capacity(nx * ny);
        for (row, samples) in rows.iter().enumerate() {
            let samples = samples.as_ref();
            if samples.len() != nx {
                return Err(InterpolationError::ColumnCountMismatch {
                    row,
                    columns: samples.len(),
                    expected: nx,
                });
            }
            values.extend_from_slice(samples);
        }

        Ok(Self {
            x_axis,
            y_axis,
            values,
        })
    }

    /// Evaluate the field at `(x, y)`, interpolating inside the grid and
    /// extrapolating linearly outside it.
    #[inline]
    pub fn get(&self, x: T, y: T) -> T {
        let i = self.x_axis.cell_index(x);
        let j = self.y_axis.cell_index(y);
        let xs = self.x_axis.coords();
        let ys = self.y_axis.coords();

        let left = lerp(self.value_at(j, i), self.value_at(j + 1, i), ys[j], ys[j + 1], y);
        let right = lerp(
            self.value_at(j, i + 1),
            self.value_at(j + 1, i + 1),
            ys[j],
            ys[j + 1],
            y,
        );
        lerp(left, right, xs[i], xs[i + 1], x)
    }

    /// Stored sample at grid node `(x_axis[col], y_axis[row])`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[inline]
    pub fn value_at(&self, row: usize, col: usize) -> T {
        assert!(col < self.columns(), "column {} out of range", col);
        self.values[row * self.columns() + col]
    }

    /// Number of table rows (y-axis length).
    #[inline]
    pub fn rows(&self) -> usize {
        self.y_axis.num_points()
    }

    /// Number of table columns (x-axis length).
    #[inline]
    pub fn columns(&self) -> usize {
        self.x_axis.num_points()
    }

    /// Returns a reference to the x-axis.
    #[inline]
    pub fn x_axis(&self) -> &GridAxis<T> {
        &self.x_axis
    }

    /// Returns a reference to the y-axis.
    #[inline]
    pub fn y_axis(&self) -> &GridAxis<T> {
        &self.y_axis
    }
}

/// Line through `(lo, a)` and `(hi, b)` at `v`, stepped from the nearer node.
#[inline]
fn lerp<T: Float>(a: T, b: T, lo: T, hi: T, v: T) -> T {
    let slope = (b - a) / (hi - lo);
    if v - lo <= hi - v {
        a + (v - lo) * slope
    } else {
        b + (v - hi) * slope
    }
}
