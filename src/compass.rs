//! Cardinal headings and quarter-turn rotation.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// One of the four cardinal headings.
///
/// Variants are declared in clockwise order, so a right turn is `+1` and a
/// left turn is `-1` modulo four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compass {
    N,
    E,
    S,
    W,
}

impl Compass {
    /// All headings in clockwise order starting from north.
    pub const ALL: [Compass; 4] = [Compass::N, Compass::E, Compass::S, Compass::W];

    fn index(self) -> usize {
        self as usize
    }

    /// Quarter turn anticlockwise (`L`).
    pub fn rotate_left(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Quarter turn clockwise (`R`).
    pub fn rotate_right(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Unit step taken by a forward move while facing this way.
    pub fn forward(self) -> IVec2 {
        match self {
            Compass::N => IVec2::Y,
            Compass::E => IVec2::X,
            Compass::S => IVec2::NEG_Y,
            Compass::W => IVec2::NEG_X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Compass::N => "N",
            Compass::E => "E",
            Compass::S => "S",
            Compass::W => "W",
        }
    }
}

impl FromStr for Compass {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Compass::N),
            "E" => Ok(Compass::E),
            "S" => Ok(Compass::S),
            "W" => Ok(Compass::W),
            other => Err(SimulationError::UnknownCompassPoint(other.to_string())),
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_turns_walk_clockwise() {
        assert_eq!(Compass::N.rotate_right(), Compass::E);
        assert_eq!(Compass::E.rotate_right(), Compass::S);
        assert_eq!(Compass::S.rotate_right(), Compass::W);
        assert_eq!(Compass::W.rotate_right(), Compass::N);
    }

    #[test]
    fn left_undoes_right() {
        for c in Compass::ALL {
            assert_eq!(c.rotate_right().rotate_left(), c);
            assert_eq!(c.rotate_left().rotate_left().rotate_left().rotate_left(), c);
        }
    }

    #[test]
    fn forward_vectors_are_unit_steps() {
        assert_eq!(Compass::N.forward(), IVec2::new(0, 1));
        assert_eq!(Compass::E.forward(), IVec2::new(1, 0));
        assert_eq!(Compass::S.forward(), IVec2::new(0, -1));
        assert_eq!(Compass::W.forward(), IVec2::new(-1, 0));
    }

    #[test]
    fn parse_rejects_anything_but_exact_letters() {
        assert_eq!("W".parse::<Compass>(), Ok(Compass::W));
        for bad in ["X", "n", "NE", ""] {
            assert_eq!(
                bad.parse::<Compass>(),
                Err(SimulationError::UnknownCompassPoint(bad.to_string()))
            );
        }
    }
}
