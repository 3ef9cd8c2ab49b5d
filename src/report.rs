use crate::compass::Compass;
use crate::rover::Rover;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker appended to the line of a rover that fell off the grid.
pub const LOST_MARKER: &str = "LOST";

/// The terminal state of one rover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverReport {
    /// Last in-bounds position.
    pub position: IVec2,

    /// Heading when the rover stopped.
    pub facing: Compass,

    /// Whether the rover fell off the grid.
    pub lost: bool,
}

impl RoverReport {
    /// Renders `"<x> <y> <facing>"`, plus `" <marker>"` when lost.
    pub fn line_with_marker(&self, marker: &str) -> String {
        let mut line = format!("{} {} {}", self.position.x, self.position.y, self.facing);
        if self.lost {
            line.push(' ');
            line.push_str(marker);
        }
        line
    }
}

impl From<&Rover> for RoverReport {
    fn from(rover: &Rover) -> Self {
        Self {
            position: rover.position(),
            facing: rover.facing(),
            lost: rover.is_lost(),
        }
    }
}

impl fmt::Display for RoverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line_with_marker(LOST_MARKER))
    }
}

/// Outcome of a full run: one report per rover, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Inclusive upper-right corner of the grid the rovers ran on.
    pub upper_right: IVec2,

    pub rovers: Vec<RoverReport>,

    /// Cells left scented by fallen rovers, in the order they fell.
    pub scents: Vec<IVec2>,

    #[serde(skip)]
    pub(crate) lost_marker: Option<String>,
}

impl SimulationReport {
    pub fn new(upper_right: IVec2) -> Self {
        Self {
            upper_right,
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, report: RoverReport) {
        if report.lost {
            self.scents.push(report.position);
        }
        self.rovers.push(report);
    }

    /// One formatted line per rover.
    pub fn lines(&self) -> Vec<String> {
        let marker = self.lost_marker.as_deref().unwrap_or(LOST_MARKER);
        self.rovers
            .iter()
            .map(|r| r.line_with_marker(marker))
            .collect()
    }

    pub fn lost_count(&self) -> usize {
        self.rovers.iter().filter(|r| r.lost).count()
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_rovers_get_the_marker() {
        let safe = RoverReport {
            position: IVec2::new(1, 1),
            facing: Compass::E,
            lost: false,
        };
        let lost = RoverReport {
            position: IVec2::new(3, 3),
            facing: Compass::N,
            lost: true,
        };
        assert_eq!(safe.to_string(), "1 1 E");
        assert_eq!(lost.to_string(), "3 3 N LOST");
        assert_eq!(lost.line_with_marker("GONE"), "3 3 N GONE");
    }

    #[test]
    fn report_keeps_input_order_and_collects_scents() {
        let mut report = SimulationReport::new(IVec2::new(4, 4));
        report.record(RoverReport {
            position: IVec2::new(0, 4),
            facing: Compass::N,
            lost: true,
        });
        report.record(RoverReport {
            position: IVec2::new(0, 4),
            facing: Compass::N,
            lost: false,
        });
        assert_eq!(report.lines(), vec!["0 4 N LOST", "0 4 N"]);
        assert_eq!(report.to_string(), "0 4 N LOST\n0 4 N");
        assert_eq!(report.scents, vec![IVec2::new(0, 4)]);
        assert_eq!(report.lost_count(), 1);
    }
}
