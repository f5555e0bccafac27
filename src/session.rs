//! The race session: the state machine that drives one race from setup to a
//! terminal verdict.

use anyhow::{Context, Result};
use gridrace_kinematics::{Pose, Racer, VelocityController};
use gridrace_track::{ObjectiveSelector, TrackGrid};
use tracing::{debug, error, info, warn};

use crate::protocol::{self, ServerAck};
use crate::transport::LineTransport;

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RacePhase {
    /// Ticks are being played.
    Running,
    /// The server signaled completion.
    Finished,
    /// The server rejected a move, answered with an unknown line, or the
    /// stream ended.
    Failed,
}

/// One race against the server.
///
/// Owns the grid, the racer, and the current and previous objective points;
/// every tick plans a velocity, integrates it, emits the position, and
/// reacts to the server's acknowledgment.
pub struct RaceSession<T: LineTransport> {
    transport: T,
    grid: TrackGrid,
    racer: Racer,
    target: Pose,
    previous_target: Pose,
    phase: RacePhase,
}

impl<T: LineTransport> RaceSession<T> {
    /// Runs the setup phase: reads the grid, the starting position, and the
    /// first objective area, then selects the first objective point.
    ///
    /// The previous objective starts out as the racer's starting pose, so
    /// the very first tick accelerates away from the start line.
    pub fn start(mut transport: T) -> Result<Self> {
        let grid = protocol::read_grid(&mut transport)?;
        let start = protocol::read_start_pose(&mut transport)?;
        let area = protocol::read_objective_area(&mut transport)?;
        let target = ObjectiveSelector::choose_point(&grid, &area)
            .context("initial objective area holds no cell of the grid")?;

        info!(size = grid.size(), start = %start, "race session ready");
        Ok(Self {
            transport,
            grid,
            racer: Racer::new(start),
            target: target.into(),
            previous_target: start,
            phase: RacePhase::Running,
        })
    }

    /// Plays ticks until the session reaches a terminal phase.
    pub fn run(&mut self) -> RacePhase {
        while self.phase == RacePhase::Running {
            self.tick();
        }
        self.phase
    }

    /// One tick: plan, integrate, emit, await the verdict.
    fn tick(&mut self) {
        self.racer.velocity =
            VelocityController::step(&self.racer, self.target, self.previous_target);
        self.racer.advance();

        let Pose { x, y } = self.racer.pose;
        debug!(x, y, velocity = %self.racer.velocity, "tick");
        if !self.grid.contains(x, y) {
            // The server is the sole arbiter of legality; the move is
            // reported regardless.
            warn!(x, y, "position is off the grid, awaiting server verdict");
        }

        if let Err(e) = self.emit_position() {
            error!(error = %e, "failed to report position");
            self.phase = RacePhase::Failed;
            return;
        }

        match self.transport.recv() {
            Err(e) => {
                error!(error = %e, "failed to read server acknowledgment");
                self.phase = RacePhase::Failed;
            }
            Ok(None) => {
                error!("server closed the stream mid-race");
                self.phase = RacePhase::Failed;
            }
            Ok(Some(line)) => self.apply_ack(line.trim_end()),
        }
    }

    /// Reports the racer's position as two lines, x then y.
    fn emit_position(&mut self) -> std::io::Result<()> {
        self.transport.send(&self.racer.pose.x.to_string())?;
        self.transport.send(&self.racer.pose.y.to_string())
    }

    fn apply_ack(&mut self, line: &str) {
        match ServerAck::parse(line) {
            ServerAck::Acknowledged => {}
            ServerAck::Finished => {
                info!("server reported the race finished");
                self.phase = RacePhase::Finished;
            }
            ServerAck::InvalidMove => {
                error!("server rejected the move");
                self.phase = RacePhase::Failed;
            }
            ServerAck::NewObjective => self.accept_checkpoint(),
            ServerAck::Unexpected => {
                error!(line, "unexpected server response");
                self.phase = RacePhase::Failed;
            }
        }
    }

    /// Handles `CHECKPOINT`: the current objective becomes the previous one
    /// and a fresh area is read and searched.
    fn accept_checkpoint(&mut self) {
        let area = match protocol::read_objective_area(&mut self.transport) {
            Ok(area) => area,
            Err(e) => {
                error!(error = %e, "failed to read the next objective area");
                self.phase = RacePhase::Failed;
                return;
            }
        };
        match ObjectiveSelector::choose_point(&self.grid, &area) {
            Some(point) => {
                self.previous_target = self.target;
                self.target = point.into();
                debug!(target = %point, "checkpoint accepted");
            }
            None => {
                error!("objective area holds no cell of the grid");
                self.phase = RacePhase::Failed;
            }
        }
    }
}
