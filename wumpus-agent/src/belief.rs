use wumpus_core::{Bounds, Coord, Grid, Perception, Perceptions};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Score added per matching perception. A cell has at most four neighbours that
/// could be the source, so four unresolved observations saturate to 1.0.
pub const EVIDENCE_STEP: f64 = 0.25;

/// Score sum at which a cell is flagged as probably not empty.
pub const SUSPECT_THRESHOLD: f64 = 0.49;

/// Score at which a singleton hazard is considered located.
pub const CERTAINTY_THRESHOLD: f64 = 0.5;

/// Tri-state emptiness of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EmptyFlag {
    /// Proven hazard-free.
    Safe,
    /// Enough evidence to doubt it is empty. Not a proof.
    Suspect,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeliefCell {
    pub wumpus: f64,
    pub pit: f64,
    pub gold: f64,
    pub empty: EmptyFlag,
}

impl BeliefCell {
    pub const SAFE: BeliefCell = BeliefCell {
        wumpus: 0.0,
        pit: 0.0,
        gold: 0.0,
        empty: EmptyFlag::Safe,
    };

    pub fn sum(&self) -> f64 {
        self.wumpus + self.pit + self.gold
    }

    pub fn is_safe(&self) -> bool {
        self.empty == EmptyFlag::Safe
    }
}

/// Per-cell evidence accumulator sized to the world.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeliefGrid {
    cells: Grid<BeliefCell>,
}

impl BeliefGrid {
    /// Zero-filled, every cell `Unknown`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            cells: Grid::new(bounds),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.cells.bounds()
    }

    /// Out-of-bounds cells read as the zero belief.
    pub fn get(&self, c: Coord) -> BeliefCell {
        self.cells.get(c).copied().unwrap_or_default()
    }

    pub fn set(&mut self, c: Coord, cell: BeliefCell) {
        self.cells.set(c, cell);
    }

    pub fn mark_safe(&mut self, c: Coord) {
        self.set(c, BeliefCell::SAFE);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &BeliefCell)> + '_ {
        self.cells.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[BeliefCell]> + '_ {
        self.cells.rows()
    }

    /// Fold the perceptions sensed on one cell into its unvisited neighbours.
    ///
    /// No perceptions proves every listed cell safe. Otherwise each sensed
    /// hazard adds [`EVIDENCE_STEP`] to the matching score of every listed cell
    /// that is not already proven safe. The collapse rule runs afterwards.
    pub fn update(&mut self, perceptions: &Perceptions, adjacent_unvisited: &[Coord]) {
        if perceptions.is_empty() {
            for &c in adjacent_unvisited {
                self.mark_safe(c);
            }
        } else {
            let step = |p: Perception| {
                if perceptions.contains(p) {
                    EVIDENCE_STEP
                } else {
                    0.0
                }
            };
            let (wumpus, pit, gold) = (
                step(Perception::Stench),
                step(Perception::Breeze),
                step(Perception::Glitter),
            );

            for &c in adjacent_unvisited {
                let Some(cell) = self.cells.get_mut(c) else {
                    continue;
                };
                if cell.is_safe() {
                    continue;
                }
                cell.wumpus += wumpus;
                cell.pit += pit;
                cell.gold += gold;
                cell.empty = if cell.sum() >= SUSPECT_THRESHOLD {
                    EmptyFlag::Suspect
                } else {
                    EmptyFlag::Unknown
                };
            }
        }

        // Exactly one wumpus and one gold exist, so one located instance
        // settles every other cell. Pits can be many and are left alone.
        self.collapse(|cell| &mut cell.wumpus);
        self.collapse(|cell| &mut cell.gold);
    }

    fn collapse(&mut self, score: impl Fn(&mut BeliefCell) -> &mut f64) {
        let located = self
            .cells
            .values_mut()
            .any(|cell| *score(cell) >= CERTAINTY_THRESHOLD);
        if !located {
            return;
        }
        for cell in self.cells.values_mut() {
            let s = score(cell);
            *s = if *s >= CERTAINTY_THRESHOLD { 1.0 } else { 0.0 };
        }
    }
}
