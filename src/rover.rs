//! Rover state and the single-command movement rule.

use crate::compass::Compass;
use crate::error::{Result, SimulationError};
use crate::grid::Grid;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Instructions a rover understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Quarter turn anticlockwise (`L`).
    Left,
    /// Quarter turn clockwise (`R`).
    Right,
    /// Advance one cell in the current heading (`F`).
    Forward,
}

impl TryFrom<char> for Command {
    type Error = SimulationError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            'F' => Ok(Command::Forward),
            other => Err(SimulationError::IllegalCommand(other)),
        }
    }
}

/// What a single [`Rover::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Turned,
    Moved,
    /// The move would have left the grid from a scented cell, so the rover held still.
    Absorbed,
    /// The rover left the grid and is now lost.
    Fell,
    /// The rover was already lost; nothing happened.
    Ignored,
}

/// A rover on the grid.
///
/// `position` is always in bounds: a move that would leave the grid either
/// gets absorbed or leaves the rover lost at its last valid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rover {
    position: IVec2,
    facing: Compass,
    lost: bool,
}

impl Rover {
    /// Places a rover at `position`, which must lie within `grid`.
    pub fn deploy(grid: &Grid, position: IVec2, facing: Compass) -> Result<Self> {
        if !grid.is_in_bounds(position) {
            return Err(SimulationError::IllegalStartingPosition {
                x: position.x,
                y: position.y,
            });
        }
        Ok(Self {
            position,
            facing,
            lost: false,
        })
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn facing(&self) -> Compass {
        self.facing
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// Applies one command, consulting and updating the grid's scent marks.
    pub fn step(&mut self, grid: &mut Grid, command: Command) -> StepOutcome {
        if self.lost {
            return StepOutcome::Ignored;
        }

        let outcome = match command {
            Command::Left => {
                self.facing = self.facing.rotate_left();
                StepOutcome::Turned
            }
            Command::Right => {
                self.facing = self.facing.rotate_right();
                StepOutcome::Turned
            }
            Command::Forward => {
                let candidate = self.position + self.facing.forward();
                if grid.is_in_bounds(candidate) {
                    self.position = candidate;
                    StepOutcome::Moved
                } else if grid.is_scented(self.position) {
                    StepOutcome::Absorbed
                } else {
                    grid.mark_scented(self.position);
                    self.lost = true;
                    warn!(
                        x = self.position.x,
                        y = self.position.y,
                        facing = %self.facing,
                        "rover fell off the grid"
                    );
                    StepOutcome::Fell
                }
            }
        };

        trace!(?command, ?outcome, pos = ?self.position, facing = %self.facing, "step");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(4, 4).unwrap()
    }

    #[test]
    fn command_parsing_is_closed() {
        assert_eq!(Command::try_from('L'), Ok(Command::Left));
        assert_eq!(Command::try_from('R'), Ok(Command::Right));
        assert_eq!(Command::try_from('F'), Ok(Command::Forward));
        assert_eq!(
            Command::try_from('X'),
            Err(SimulationError::IllegalCommand('X'))
        );
        assert!(Command::try_from('f').is_err());
    }

    #[test]
    fn cannot_deploy_off_grid() {
        let g = grid();
        assert_eq!(
            Rover::deploy(&g, IVec2::new(6, 6), Compass::E).unwrap_err(),
            SimulationError::IllegalStartingPosition { x: 6, y: 6 }
        );
        assert!(Rover::deploy(&g, IVec2::new(-1, 0), Compass::E).is_err());
        assert!(Rover::deploy(&g, IVec2::new(4, 4), Compass::E).is_ok());
    }

    #[test]
    fn first_fall_marks_scent_and_freezes_rover() {
        let mut g = grid();
        let mut rover = Rover::deploy(&g, IVec2::new(0, 4), Compass::N).unwrap();

        assert_eq!(rover.step(&mut g, Command::Forward), StepOutcome::Fell);
        assert!(rover.is_lost());
        assert_eq!(rover.position(), IVec2::new(0, 4));
        assert!(g.is_scented(IVec2::new(0, 4)));

        assert_eq!(rover.step(&mut g, Command::Right), StepOutcome::Ignored);
        assert_eq!(rover.facing(), Compass::N);
    }

    #[test]
    fn scented_edge_absorbs_the_move() {
        let mut g = grid().with_scents([IVec2::new(4, 0)]);
        let mut rover = Rover::deploy(&g, IVec2::new(4, 0), Compass::E).unwrap();

        assert_eq!(rover.step(&mut g, Command::Forward), StepOutcome::Absorbed);
        assert!(!rover.is_lost());
        assert_eq!(rover.position(), IVec2::new(4, 0));
        assert_eq!(g.scent_count(), 1);

        // The scent only protects the cell it was left on.
        assert_eq!(rover.step(&mut g, Command::Left), StepOutcome::Turned);
        assert_eq!(rover.step(&mut g, Command::Forward), StepOutcome::Moved);
        assert_eq!(rover.position(), IVec2::new(4, 1));
    }

    #[test]
    fn scent_applies_to_any_heading_leaving_that_cell() {
        let mut g = grid().with_scents([IVec2::new(0, 0)]);
        let mut rover = Rover::deploy(&g, IVec2::ZERO, Compass::S).unwrap();
        assert_eq!(rover.step(&mut g, Command::Forward), StepOutcome::Absorbed);
        rover.step(&mut g, Command::Right);
        assert_eq!(rover.facing(), Compass::W);
        assert_eq!(rover.step(&mut g, Command::Forward), StepOutcome::Absorbed);
        assert!(!rover.is_lost());
    }
}
