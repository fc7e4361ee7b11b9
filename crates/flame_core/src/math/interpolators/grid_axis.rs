//! Strictly increasing coordinate axis with cell location.

use crate::types::{AxisKind, InterpolationError};
use num_traits::Float;

/// Position of a query coordinate relative to a grid axis.
///
/// The query value is reconstructed as
/// `coords[index] + fraction * (coords[index + 1] - coords[index])`.
/// `fraction` lies in `[0, 1]` inside the axis range, below zero left of the
/// first coordinate and above one right of the last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLocation<T> {
    /// Lower coordinate index of the cell, in `[0, n - 2]`
    pub index: usize,
    /// Normalised offset within (or beyond) the cell
    pub fraction: T,
}

impl<T: Float> CellLocation<T> {
    /// Returns `true` if the query lies outside the axis range.
    ///
    /// NaN fractions are not classified as extrapolated.
    #[inline]
    pub fn is_extrapolated(&self) -> bool {
        self.fraction < T::zero() || self.fraction > T::one()
    }
}

/// Immutable, strictly increasing sequence of grid coordinates.
///
/// Spacing may be arbitrary. The axis always holds at least two points, so
/// every query maps onto a cell with a well-defined slope.
///
/// # Example
///
/// ```
/// use flame_core::math::interpolators::GridAxis;
/// use flame_core::types::AxisKind;
///
/// let axis = GridAxis::new(AxisKind::X, vec![0.0_f64, 0.2, 0.8, 1.0]).unwrap();
///
/// let cell = axis.locate(0.5);
/// assert_eq!(cell.index, 1);
/// assert!((cell.fraction - 0.5).abs() < 1e-12);
///
/// // Right of the last coordinate: last cell, fraction above one
/// let cell = axis.locate(1.2);
/// assert_eq!(cell.index, 2);
/// assert!((cell.fraction - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridAxis<T: Float> {
    kind: AxisKind,
    coords: Vec<T>,
}

impl<T: Float> GridAxis<T> {
    /// Validate and take ownership of axis coordinates.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 coordinates
    /// * `Err(InterpolationError::NonFiniteCoordinate)` - NaN or infinite coordinate
    /// * `Err(InterpolationError::NonMonotonicData)` - Coordinates not strictly increasing
    pub fn new(kind: AxisKind, coords: Vec<T>) -> Result<Self, InterpolationError> {
        if coords.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                axis: kind,
                got: coords.len(),
                need: 2,
            });
        }

        if let Some(index) = coords.iter().position(|c| !c.is_finite()) {
            return Err(InterpolationError::NonFiniteCoordinate { axis: kind, index });
        }

        if let Some(pos) = coords.windows(2).position(|w| w[0] >= w[1]) {
            return Err(InterpolationError::NonMonotonicData {
                axis: kind,
                index: pos + 1,
            });
        }

        Ok(Self { kind, coords })
    }

    /// Locate the cell containing `value`, or the boundary cell whose slope
    /// extends to it.
    ///
    /// Inside the range the cell `i` satisfies `coords[i] <= value <= coords[i + 1]`;
    /// a value equal to an interior coordinate starts the cell to its right and
    /// the last coordinate belongs to the last cell. Values a rounding error
    /// to either side of a coordinate land in adjacent cells with fractions
    /// next to 1 and 0 respectively, so both evaluate to the stored sample.
    ///
    /// NaN maps to the first cell with a NaN fraction.
    #[inline]
    pub fn locate(&self, value: T) -> CellLocation<T> {
        let index = self.cell_index(value);
        let lo = self.coords[index];
        let hi = self.coords[index + 1];
        CellLocation {
            index,
            fraction: (value - lo) / (hi - lo),
        }
    }

    /// Lower index of the cell [`locate`](Self::locate) selects for `value`.
    #[inline]
    pub(crate) fn cell_index(&self, value: T) -> usize {
        let upper = self.coords.partition_point(|&c| c <= value);
        upper.saturating_sub(1).min(self.coords.len() - 2)
    }

    /// Returns `true` if `value` lies within `[first, last]`.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        let (lo, hi) = self.bounds();
        value >= lo && value <= hi
    }

    /// First and last coordinate.
    #[inline]
    pub fn bounds(&self) -> (T, T) {
        (self.coords[0], self.coords[self.coords.len() - 1])
    }

    /// Number of coordinates (always at least 2).
    #[inline]
    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    /// Which axis of the table this is.
    #[inline]
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    /// Returns a reference to the coordinates.
    #[inline]
    pub fn coords(&self) -> &[T] {
        &self.coords
    }
}
