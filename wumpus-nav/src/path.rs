use wumpus_core::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered route. `cells[0]` is the start; the last cell is the goal.
///
/// A single-cell path is "degenerate": either start equals goal or no route exists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    pub fn new(cells: Vec<Coord>) -> Self {
        Self { cells }
    }

    pub fn stay(at: Coord) -> Self {
        Self { cells: vec![at] }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_degenerate(&self) -> bool {
        self.cells.len() < 2
    }

    pub fn start(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// The step after the start.
    pub fn first_step(&self) -> Option<Coord> {
        self.cells.get(1).copied()
    }

    /// The cell following `at`, if `at` lies on the path and is not its last cell.
    pub fn step_after(&self, at: Coord) -> Option<Coord> {
        let i = self.cells.iter().position(|c| *c == at)?;
        self.cells.get(i + 1).copied()
    }

    /// Consecutive cells are orthogonally adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

impl From<Vec<Coord>> for Path {
    fn from(cells: Vec<Coord>) -> Self {
        Self::new(cells)
    }
}
