//! Interpreter that turns a plain-text mission into a [`SimulationReport`].
//!
//! The entry point is [`Simulation`]. Configure it with a [`SimulationConfig`],
//! then call [`Simulation::run`] with the mission text. [`run_robots`] is a
//! shorthand that uses the default configuration and returns the result lines.
//!
//! # Mission format
//!
//! ```text
//! 5 3          <- inclusive upper-right corner of the grid
//! 1 1 E        <- rover start: x y heading
//! RFRFRFRF     <- rover commands (L, R, F)
//!
//! 3 2 N        <- next rover, and so on
//! FRRFLLFFRRFLL
//! ```
//!
//! Input is split on any run of `\n`/`\r`, so blank separator lines are
//! optional. Line numbers in errors count non-blank lines only.

use crate::compass::Compass;
use crate::error::{Result, SimulationError};
use crate::grid::{Grid, MAX_COORDINATE};
use crate::report::{LOST_MARKER, RoverReport, SimulationReport};
use crate::rover::{Command, Rover, StepOutcome};
use glam::IVec2;
use tracing::debug;

/// Configuration for a simulation run.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Largest allowed coordinate for the grid corner. Never exceeds
    /// [`MAX_COORDINATE`]; larger values are clamped.
    pub max_coordinate: i32,
    /// Word appended to the result line of a rover that fell.
    pub lost_marker: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_coordinate: MAX_COORDINATE,
            lost_marker: LOST_MARKER.to_string(),
        }
    }
}

/// Drives rovers across a grid, one at a time and in input order.
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    config: SimulationConfig,
}

/// Runs `input` with the default configuration and returns one line per rover.
pub fn run_robots(input: &str) -> Result<Vec<String>> {
    Simulation::default().run(input).map(|report| report.lines())
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Parses and executes the whole mission.
    ///
    /// Each rover runs to completion before the next position line is read.
    /// Scent marks carry over from one rover to the next. Any error aborts
    /// the run; no partial report is returned.
    pub fn run(&self, input: &str) -> Result<SimulationReport> {
        let lines: Vec<(usize, &str)> = input
            .split(['\n', '\r'])
            .filter(|l| !l.is_empty())
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .collect();

        if lines.len() < 3 {
            return Err(SimulationError::malformed(
                lines.len().max(1),
                "expected a grid size line followed by at least one rover",
            ));
        }

        let mut grid = self.parse_grid(lines[0])?;
        debug!(upper_right = ?grid.upper_right(), "grid ready");

        let mut report = SimulationReport::new(grid.upper_right());
        report.lost_marker = Some(self.config.lost_marker.clone());

        for block in lines[1..].chunks(2) {
            let rover = parse_rover(&grid, block[0])?;
            let commands = block.get(1).map_or("", |&(_, l)| l);
            let rover = drive(rover, &mut grid, commands)?;

            let result = RoverReport::from(&rover);
            debug!(rover = report.rovers.len(), result = %result, "rover finished");
            report.record(result);
        }

        debug!(
            rovers = report.rovers.len(),
            lost = report.lost_count(),
            scents = grid.scent_count(),
            "simulation complete"
        );
        Ok(report)
    }

    fn parse_grid(&self, (line, text): (usize, &str)) -> Result<Grid> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let &[x, y] = tokens.as_slice() else {
            return Err(SimulationError::malformed(
                line,
                format!("unable to parse world size: {text:?}"),
            ));
        };
        Grid::with_limit(
            parse_coordinate(line, x)?,
            parse_coordinate(line, y)?,
            self.config.max_coordinate,
        )
    }
}

fn parse_rover(grid: &Grid, (line, text): (usize, &str)) -> Result<Rover> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let &[x, y, facing] = tokens.as_slice() else {
        return Err(SimulationError::malformed(
            line,
            format!("unable to parse rover position: {text:?}"),
        ));
    };
    let position = IVec2::new(parse_coordinate(line, x)?, parse_coordinate(line, y)?);
    let facing: Compass = facing.parse()?;
    Rover::deploy(grid, position, facing)
}

fn parse_coordinate(line: usize, token: &str) -> Result<i32> {
    token
        .parse()
        .map_err(|_| SimulationError::malformed(line, format!("{token:?} is not an integer")))
}

/// Feeds `commands` to `rover` until they run out or the rover is lost.
///
/// Characters after the fall are never read, so an illegal command there does
/// not fail the run.
fn drive(mut rover: Rover, grid: &mut Grid, commands: &str) -> Result<Rover> {
    for c in commands.chars() {
        let command = Command::try_from(c)?;
        if rover.step(grid, command) == StepOutcome::Fell {
            break;
        }
    }
    Ok(rover)
}
