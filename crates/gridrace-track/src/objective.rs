//! Objective areas and the selection of the best objective point.
//!
//! The server announces a rectangular area with each checkpoint; the racer
//! steers toward the single highest-value cell of that area that lies on the
//! grid.

use crate::map::{GridPoint, TrackGrid};
use gridrace_kinematics::Pose;

/// A rectangular region of interest announced by the server.
///
/// The rectangle may extend outside the grid; the parts that do are ignored
/// when a point is selected. A new area replaces the old one wholesale on
/// every checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveArea {
    /// Top-left corner x coordinate.
    pub x: i32,
    /// Top-left corner y coordinate.
    pub y: i32,
    /// Width in cells.
    pub w: i32,
    /// Height in cells.
    pub h: i32,
}

impl ObjectiveArea {
    /// Creates a new `ObjectiveArea`.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// A single grid coordinate selected as the current movement target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectivePoint {
    /// The x-coordinate of the point.
    pub x: i32,
    /// The y-coordinate of the point.
    pub y: i32,
}

impl ObjectivePoint {
    /// Creates a new `ObjectivePoint`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for ObjectivePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<ObjectivePoint> for Pose {
    fn from(point: ObjectivePoint) -> Self {
        Pose::new(point.x, point.y)
    }
}

/// Picks objective points out of announced areas.
pub struct ObjectiveSelector;

impl ObjectiveSelector {
    /// Selects the best-value point of `area`, clipped to the grid.
    ///
    /// Scans every grid-aligned point of the rectangle, x outer and y inner,
    /// skipping points off the grid. The point with the strictly greatest
    /// cell value wins; on a tie the first point encountered is kept, so the
    /// result is reproducible.
    ///
    /// # Arguments
    /// * `grid` - The track grid supplying cell values.
    /// * `area` - The rectangle to search.
    ///
    /// # Returns
    /// * `Option<ObjectivePoint>` - The selected point, or `None` when no
    ///   point of the area lies on the grid (including empty rectangles).
    #[must_use]
    pub fn choose_point(grid: &TrackGrid, area: &ObjectiveArea) -> Option<ObjectivePoint> {
        let mut best: Option<(ObjectivePoint, i32)> = None;

        for x in area.x..area.x.saturating_add(area.w) {
            for y in area.y..area.y.saturating_add(area.h) {
                if !grid.contains(x, y) {
                    continue;
                }
                let value = grid.value_at(GridPoint::new(x as usize, y as usize));
                let better = match best {
                    None => true,
                    Some((_, best_value)) => value > best_value,
                };
                if better {
                    best = Some((ObjectivePoint::new(x, y), value));
                }
            }
        }

        if let Some((point, value)) = best {
            tracing::debug!(x = point.x, y = point.y, value, "objective point selected");
        }
        best.map(|(point, _)| point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chooses_highest_value_cell() {
        // 3x3 grid, all zero except (2, 2) = 5; the area covers the grid.
        let mut grid = TrackGrid::new(3).unwrap();
        grid.set_value(GridPoint::new(2, 2), 5);

        let area = ObjectiveArea::new(0, 0, 3, 3);
        let point = ObjectiveSelector::choose_point(&grid, &area).unwrap();
        assert_eq!(point, ObjectivePoint::new(2, 2));
    }

    #[test]
    fn test_tie_keeps_first_in_scan_order() {
        // Two equal maxima at (0, 1) and (2, 0); x is the outer loop and y
        // the inner one, so (0, 1) is seen first.
        let grid = TrackGrid::from_values(3, vec![0, 7, 0, 0, 0, 0, 7, 0, 0]).unwrap();
        let area = ObjectiveArea::new(0, 0, 3, 3);
        let point = ObjectiveSelector::choose_point(&grid, &area).unwrap();
        assert_eq!(point, ObjectivePoint::new(0, 1));
    }

    #[test]
    fn test_negative_values_still_select() {
        let grid = TrackGrid::from_values(2, vec![-9, -3, -7, -5]).unwrap();
        let area = ObjectiveArea::new(0, 0, 2, 2);
        let point = ObjectiveSelector::choose_point(&grid, &area).unwrap();
        assert_eq!(point, ObjectivePoint::new(0, 1));
    }

    #[test]
    fn test_area_is_clipped_to_grid() {
        // The best value of the whole grid sits outside the clipped area and
        // must not be chosen; the rectangle hangs over the top-left corner.
        let mut grid = TrackGrid::new(3).unwrap();
        grid.set_value(GridPoint::new(2, 2), 9);
        grid.set_value(GridPoint::new(1, 0), 4);

        let area = ObjectiveArea::new(-2, -2, 4, 3);
        let point = ObjectiveSelector::choose_point(&grid, &area).unwrap();
        assert_eq!(point, ObjectivePoint::new(1, 0));
        assert!(grid.contains(point.x, point.y));
    }

    #[test]
    fn test_fully_off_grid_area_yields_none() {
        let grid = TrackGrid::new(3).unwrap();
        let area = ObjectiveArea::new(5, 5, 2, 2);
        assert_eq!(ObjectiveSelector::choose_point(&grid, &area), None);

        let area = ObjectiveArea::new(-4, -4, 3, 3);
        assert_eq!(ObjectiveSelector::choose_point(&grid, &area), None);
    }

    #[test]
    fn test_empty_rectangle_yields_none() {
        let grid = TrackGrid::new(3).unwrap();
        assert_eq!(
            ObjectiveSelector::choose_point(&grid, &ObjectiveArea::new(1, 1, 0, 2)),
            None
        );
        assert_eq!(
            ObjectiveSelector::choose_point(&grid, &ObjectiveArea::new(1, 1, 2, -1)),
            None
        );
    }

    #[test]
    fn test_point_converts_to_pose() {
        let pose: Pose = ObjectivePoint::new(3, -1).into();
        assert_eq!(pose, Pose::new(3, -1));
    }
}
