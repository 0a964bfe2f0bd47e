use std::collections::BTreeSet;

use wumpus_core::{Bounds, Coord, Perceptions};

use crate::BeliefGrid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cells the agent has stood on. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisitedSet(BTreeSet<Coord>);

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `c` was not yet present.
    pub fn insert(&mut self, c: Coord) -> bool {
        self.0.insert(c)
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.0.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending `(x, y)` order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.0.iter().copied()
    }
}

/// Everything an agent has learned: its belief grid and visited set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Knowledge {
    beliefs: BeliefGrid,
    visited: VisitedSet,
}

impl Knowledge {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            beliefs: BeliefGrid::new(bounds),
            visited: VisitedSet::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.beliefs.bounds()
    }

    pub fn beliefs(&self) -> &BeliefGrid {
        &self.beliefs
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Record standing on `pos` while sensing `perceptions`.
    ///
    /// On a first visit the cell itself is zeroed and marked safe, then its
    /// unvisited neighbours absorb the perceptions. Repeat visits and
    /// out-of-bounds positions change nothing and return `false`.
    pub fn visit(&mut self, pos: Coord, perceptions: &Perceptions) -> bool {
        let bounds = self.bounds();
        if !bounds.contains(pos) || !self.visited.insert(pos) {
            return false;
        }
        self.beliefs.mark_safe(pos);

        let adjacent: Vec<Coord> = bounds
            .neighbors(pos)
            .filter(|n| !self.visited.contains(*n))
            .collect();
        self.beliefs.update(perceptions, &adjacent);
        true
    }

    /// Planning may step on visited cells and on `target` itself.
    pub fn traversable(&self, c: Coord, target: Coord) -> bool {
        c == target || self.visited.contains(c)
    }
}
