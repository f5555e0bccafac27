//! Track model for the grid race: the square grid of bonus/malus cell
//! values, rectangular objective areas announced by the server, and the
//! selection of the best objective point inside an area.

pub mod error;
pub mod map;
pub mod objective;

pub use error::TrackError;
pub use map::{GridPoint, TrackGrid};
pub use objective::{ObjectiveArea, ObjectivePoint, ObjectiveSelector};
