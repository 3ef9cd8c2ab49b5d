//! The bounded plateau and the scent marks left by fallen rovers.

use glam::IVec2;
use std::collections::HashSet;

use crate::error::{Result, SimulationError};

/// Largest coordinate allowed for either axis of the upper-right corner.
pub const MAX_COORDINATE: i32 = 50;

/// A rectangular grid anchored at the origin.
///
/// The boundary is fixed at construction. The scent set only ever grows and
/// is shared by every rover in a run.
#[derive(Clone, Debug)]
pub struct Grid {
    upper_right: IVec2,
    scented: HashSet<IVec2>,
}

impl Grid {
    /// Creates a grid whose inclusive upper-right corner is `(x, y)`.
    pub fn new(x: i32, y: i32) -> Result<Self> {
        Self::with_limit(x, y, MAX_COORDINATE)
    }

    /// Like [`new`](Self::new) but with a tighter cap on the corner. A `max`
    /// above [`MAX_COORDINATE`] is clamped down to it.
    pub fn with_limit(x: i32, y: i32, max: i32) -> Result<Self> {
        let max = max.min(MAX_COORDINATE);
        if !(0..=max).contains(&x) || !(0..=max).contains(&y) {
            return Err(SimulationError::InvalidWorldSize { x, y, max });
        }
        Ok(Self {
            upper_right: IVec2::new(x, y),
            scented: HashSet::new(),
        })
    }

    /// Builder that pre-seeds scent marks.
    pub fn with_scents(mut self, scents: impl IntoIterator<Item = IVec2>) -> Self {
        self.scented.extend(scents);
        self
    }

    pub fn upper_right(&self) -> IVec2 {
        self.upper_right
    }

    pub fn is_in_bounds(&self, pos: IVec2) -> bool {
        pos.cmpge(IVec2::ZERO).all() && pos.cmple(self.upper_right).all()
    }

    pub fn is_scented(&self, pos: IVec2) -> bool {
        self.scented.contains(&pos)
    }

    /// Records that a rover fell from `pos`. Marking twice is a no-op.
    pub fn mark_scented(&mut self, pos: IVec2) {
        self.scented.insert(pos);
    }

    pub fn scent_count(&self) -> usize {
        self.scented.len()
    }
}
