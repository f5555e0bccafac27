//! Map-related functionality for the race track.
//!
//! This module provides the square grid of cell values the server announces
//! during setup, plus the grid-coordinate point type used to address it.

pub mod grid;
pub mod point_types;

pub use grid::TrackGrid;
pub use point_types::GridPoint;
