//! Wire protocol of the race server: numeric setup lines and per-tick
//! acknowledgment markers.
//!
//! Numeric lines parse with a fallback to zero. The server is allowed to be
//! sloppy; the client is not allowed to crash on it.

use anyhow::{Context, Result};
use gridrace_kinematics::Pose;
use gridrace_track::{GridPoint, ObjectiveArea, TrackGrid};
use tracing::{debug, trace};

use crate::transport::LineTransport;

/// Server verdict on the last emitted position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerAck {
    /// `OK` — move accepted, keep racing.
    Acknowledged,
    /// `ERROR` — the move was illegal.
    InvalidMove,
    /// `FINISH` — the race is over, successfully.
    Finished,
    /// `CHECKPOINT` — objective reached; a new area quadruple follows.
    NewObjective,
    /// Anything else.
    Unexpected,
}

impl ServerAck {
    /// Classifies one acknowledgment line (trailing newline already
    /// stripped).
    pub fn parse(line: &str) -> Self {
        match line {
            "OK" => ServerAck::Acknowledged,
            "ERROR" => ServerAck::InvalidMove,
            "FINISH" => ServerAck::Finished,
            "CHECKPOINT" => ServerAck::NewObjective,
            _ => ServerAck::Unexpected,
        }
    }
}

/// Parses a numeric line, falling back to zero on malformed input.
pub fn parse_or_zero(line: &str) -> i32 {
    line.trim().parse().unwrap_or(0)
}

/// Reads one numeric line from the transport.
///
/// End of stream is an error here: setup data and checkpoint quadruples are
/// mandatory.
pub fn read_value<T: LineTransport>(transport: &mut T) -> Result<i32> {
    let line = transport
        .recv()
        .context("transport read failed")?
        .context("stream ended while a value was expected")?;
    Ok(parse_or_zero(&line))
}

/// Reads the grid announcement: side length, then `size * size` cell values
/// in row-major order.
pub fn read_grid<T: LineTransport>(transport: &mut T) -> Result<TrackGrid> {
    let size = read_value(transport).context("reading grid size")?;
    let mut grid =
        TrackGrid::new(size.max(0) as usize).context("grid size announced by the server")?;

    for x in 0..grid.size() {
        for y in 0..grid.size() {
            let value = read_value(transport).context("reading grid cell value")?;
            trace!(x, y, value, "grid cell");
            grid.set_value(GridPoint::new(x, y), value);
        }
    }
    debug!(size = grid.size(), "grid created");
    Ok(grid)
}

/// Reads the racer's starting position: x, then y.
pub fn read_start_pose<T: LineTransport>(transport: &mut T) -> Result<Pose> {
    let x = read_value(transport).context("reading start x")?;
    let y = read_value(transport).context("reading start y")?;
    debug!(x, y, "start position read");
    Ok(Pose::new(x, y))
}

/// Reads an objective-area quadruple: x, y, w, h.
pub fn read_objective_area<T: LineTransport>(transport: &mut T) -> Result<ObjectiveArea> {
    let x = read_value(transport).context("reading objective area x")?;
    let y = read_value(transport).context("reading objective area y")?;
    let w = read_value(transport).context("reading objective area w")?;
    let h = read_value(transport).context("reading objective area h")?;
    debug!(x, y, w, h, "objective area read");
    Ok(ObjectiveArea::new(x, y, w, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::scripted::ScriptedTransport;

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(parse_or_zero("42\n"), 42);
        assert_eq!(parse_or_zero("  -7  "), -7);
        assert_eq!(parse_or_zero("not a number"), 0);
        assert_eq!(parse_or_zero(""), 0);
        assert_eq!(parse_or_zero("12abc"), 0);
    }

    #[test]
    fn test_ack_markers() {
        assert_eq!(ServerAck::parse("OK"), ServerAck::Acknowledged);
        assert_eq!(ServerAck::parse("ERROR"), ServerAck::InvalidMove);
        assert_eq!(ServerAck::parse("FINISH"), ServerAck::Finished);
        assert_eq!(ServerAck::parse("CHECKPOINT"), ServerAck::NewObjective);
        assert_eq!(ServerAck::parse("WEIRD"), ServerAck::Unexpected);
        assert_eq!(ServerAck::parse("ok"), ServerAck::Unexpected);
    }

    #[test]
    fn test_read_grid() {
        let mut transport =
            ScriptedTransport::new(["2", "1", "2", "3", "4"]);
        let grid = read_grid(&mut transport).unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.value_at(GridPoint::new(0, 1)), 2);
        assert_eq!(grid.value_at(GridPoint::new(1, 0)), 3);
    }

    #[test]
    fn test_read_grid_with_garbage_cell() {
        // A malformed cell value reads as zero, not as an error.
        let mut transport =
            ScriptedTransport::new(["2", "1", "junk", "3", "4"]);
        let grid = read_grid(&mut transport).unwrap();
        assert_eq!(grid.value_at(GridPoint::new(0, 1)), 0);
    }

    #[test]
    fn test_unparsable_grid_size_fails_setup() {
        // parse-or-zero turns garbage into zero, and a zero-sized grid is a
        // setup error.
        let mut transport = ScriptedTransport::new(["garbage"]);
        assert!(read_grid(&mut transport).is_err());
    }

    #[test]
    fn test_truncated_setup_fails() {
        let mut transport = ScriptedTransport::new(["2", "1", "2"]);
        assert!(read_grid(&mut transport).is_err());
    }

    #[test]
    fn test_read_objective_area() {
        let mut transport = ScriptedTransport::new(["-1", "0", "4", "3"]);
        let area = read_objective_area(&mut transport).unwrap();
        assert_eq!(area, ObjectiveArea::new(-1, 0, 4, 3));
    }
}
