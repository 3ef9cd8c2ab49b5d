//! # mars-rover-sim
//!
//! Simulates rovers crossing a bounded rectangular plateau. Each rover follows its own
//! string of `L`/`R`/`F` commands. A rover that drives off the edge is lost, and it leaves
//! a scent on its last cell that stops later rovers from making the same fatal move.
//!
//! The crate is a pure engine: it takes the mission text and returns a
//! [`SimulationReport`] with one line per rover, in input order.

pub mod compass;
pub mod error;
pub mod grid;
pub mod interpreter;
pub mod report;
pub mod rover;

pub use compass::*;
pub use error::SimulationError;
pub use grid::*;
pub use interpreter::*;
pub use report::*;
pub use rover::*;
