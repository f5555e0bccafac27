#![warn(missing_docs)]

use super::GridPoint;
use crate::error::TrackError;

/// The square grid of cell values the race is played on.
///
/// Each cell holds a signed bonus/malus score; the objective selector picks
/// the highest-scoring cell inside the area the server announces. The grid
/// is filled while the setup phase reads it from the server and is never
/// mutated afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackGrid {
    /// Side length in cells.
    size: usize,
    /// Cell values, row-major: index of `(x, y)` is `x * size + y`.
    values: Vec<i32>,
}

impl TrackGrid {
    /// Creates a new zero-filled `TrackGrid`.
    ///
    /// # Arguments
    /// * `size` - Side length of the grid in cells.
    ///
    /// # Returns
    /// * `Result<Self, TrackError>` - The created grid, or an error for a
    ///   zero side length.
    pub fn new(size: usize) -> Result<Self, TrackError> {
        if size == 0 {
            return Err(TrackError::InvalidDimensions("size must be positive"));
        }

        // Check for potential overflow in data allocation
        if size.checked_mul(size).is_none() {
            return Err(TrackError::InvalidDimensions(
                "size too large, would cause overflow",
            ));
        }

        Ok(TrackGrid {
            size,
            values: vec![0; size * size],
        })
    }

    /// Creates a `TrackGrid` from a complete row-major value vector.
    ///
    /// # Arguments
    /// * `size` - Side length of the grid in cells.
    /// * `values` - `size * size` cell values, row-major.
    ///
    /// # Returns
    /// * `Result<Self, TrackError>` - The created grid, or an error if the
    ///   side length is zero or the vector length does not match.
    pub fn from_values(size: usize, values: Vec<i32>) -> Result<Self, TrackError> {
        let mut grid = Self::new(size)?;
        if values.len() != size * size {
            return Err(TrackError::ValueCountMismatch(
                "expected size * size values",
            ));
        }
        grid.values = values;
        Ok(grid)
    }

    /// Side length of the grid in cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the signed coordinates `(x, y)` name a cell of the grid.
    ///
    /// # Arguments
    /// * `x` - Signed x coordinate.
    /// * `y` - Signed y coordinate.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Calculates the index in the value vector for a given grid point
    fn index(&self, p: GridPoint) -> usize {
        p.x * self.size + p.y
    }

    /// Reads the value at a grid point.
    ///
    /// # Arguments
    /// * `p` - Point in grid coordinates.
    ///
    /// # Panics
    /// Panics if `p` lies outside the grid. Out-of-range access is a defect
    /// in the caller, not a runtime condition.
    #[must_use]
    pub fn value_at(&self, p: GridPoint) -> i32 {
        assert!(
            p.x < self.size && p.y < self.size,
            "grid access out of bounds: ({}, {}) on a {}x{} grid",
            p.x,
            p.y,
            self.size,
            self.size
        );
        self.values[self.index(p)]
    }

    /// Writes the value at a grid point. Used only while the setup phase
    /// fills the grid.
    ///
    /// # Arguments
    /// * `p` - Point in grid coordinates.
    /// * `value` - Cell value to store.
    ///
    /// # Panics
    /// Panics if `p` lies outside the grid, as [`TrackGrid::value_at`] does.
    pub fn set_value(&mut self, p: GridPoint, value: i32) {
        assert!(
            p.x < self.size && p.y < self.size,
            "grid access out of bounds: ({}, {}) on a {}x{} grid",
            p.x,
            p.y,
            self.size,
            self.size
        );
        let index = self.index(p);
        self.values[index] = value;
    }
}

impl std::fmt::Display for TrackGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TrackGrid ({}x{})", self.size, self.size)?;
        for x in 0..self.size {
            for y in 0..self.size {
                write!(f, "{:4} ", self.value_at(GridPoint::new(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
