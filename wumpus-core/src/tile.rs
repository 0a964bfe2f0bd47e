use std::collections::BTreeSet;

use crate::Grid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Pit,
    Wumpus,
    Gold,
}

impl Tile {
    /// What a neighbour of this tile senses, if anything.
    pub fn signal(self) -> Option<Perception> {
        match self {
            Tile::Empty => None,
            Tile::Pit => Some(Perception::Breeze),
            Tile::Wumpus => Some(Perception::Stench),
            Tile::Gold => Some(Perception::Glitter),
        }
    }
}

pub type TileGrid = Grid<Tile>;

/// Sensed signal. Variant order is the canonical ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Perception {
    Breeze,
    Stench,
    Glitter,
}

/// Deduplicated, ascending set of perceptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Perceptions(BTreeSet<Perception>);

impl Perceptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, p: Perception) {
        self.0.insert(p);
    }

    pub fn contains(&self, p: Perception) -> bool {
        self.0.contains(&p)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Perception> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Perception> {
        self.iter().collect()
    }
}

impl FromIterator<Perception> for Perceptions {
    fn from_iter<I: IntoIterator<Item = Perception>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perceptions_are_sorted_and_deduplicated() {
        let p: Perceptions = [
            Perception::Glitter,
            Perception::Breeze,
            Perception::Glitter,
            Perception::Stench,
            Perception::Breeze,
        ]
        .into_iter()
        .collect();

        assert_eq!(
            p.to_vec(),
            vec![Perception::Breeze, Perception::Stench, Perception::Glitter]
        );
    }
}
