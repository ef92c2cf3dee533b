use super::SearchState;
use crate::{Cost, Point};

use std::fmt;

/// What a search currently knows about a single Point of the Grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// Not discovered yet
    #[default]
    Unvisited,
    /// Discovered, with the cheapest Cost found so far
    Open(Cost),
    /// Finalized, with the lowest possible Cost from the start
    Closed(Cost),
}

impl CellState {
    /// The Cost known for this Point, if it was discovered.
    pub fn cost(self) -> Option<Cost> {
        match self {
            CellState::Unvisited => None,
            CellState::Open(cost) | CellState::Closed(cost) => Some(cost),
        }
    }
}

/// An owned copy of the progress of a [`PathSearch`](crate::PathSearch).
///
/// Taken with [`PathSearch::snapshot`](crate::PathSearch::snapshot). Since it does not borrow
/// the search, it can be handed to another thread between calls to
/// [`step`](crate::PathSearch::step).
///
/// The [`Display`](fmt::Display) implementation draws one character per Point:
/// `.` for unvisited, `o` for open and `#` for closed Points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) cells: Vec<CellState>,
    pub(super) steps: usize,
    pub(super) state: SearchState,
}

impl SearchSnapshot {
    /// `(width, height)` of the searched Grid
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The state of `point`, or `None` if it lies outside the Grid.
    pub fn get(&self, (x, y): Point) -> Option<CellState> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// The number of steps taken when the snapshot was made
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The state of the search when the snapshot was made
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The number of open Points
    pub fn open_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, CellState::Open(_)))
            .count()
    }

    /// The number of closed Points
    pub fn closed_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, CellState::Closed(_)))
            .count()
    }
}

impl fmt::Display for SearchSnapshot {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(fmt)?;
            }
            for cell in row {
                let c = match cell {
                    CellState::Unvisited => '.',
                    CellState::Open(_) => 'o',
                    CellState::Closed(_) => '#',
                };
                write!(fmt, "{}", c)?;
            }
        }
        Ok(())
    }
}
