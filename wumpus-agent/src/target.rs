use wumpus_core::Coord;

use crate::{BeliefCell, Knowledge};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column order used when scanning each row of the frontier.
///
/// Rows are always visited with `y` ascending. Equal danger keeps the first
/// cell found, so the column order decides ties within a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScanOrder {
    #[default]
    XAscending,
    XDescending,
}

impl ScanOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            ScanOrder::XAscending => "x_ascending",
            ScanOrder::XDescending => "x_descending",
        }
    }
}

impl core::fmt::Display for ScanOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ScanOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x_ascending" => Ok(ScanOrder::XAscending),
            "x_descending" => Ok(ScanOrder::XDescending),
            other => Err(format!("unknown scan order: {other}")),
        }
    }
}

/// Inside the 2x2 block at the origin.
fn is_home(c: Coord) -> bool {
    c.x <= 1 && c.y <= 1
}

/// `wumpus + pit - gold_bonus - home_bonus`; lower is better.
pub fn danger(cell: &BeliefCell, at: Coord) -> f64 {
    let gold_bonus = if cell.gold > 0.5 {
        cell.gold * 2.0
    } else {
        cell.gold / 2.0
    };
    let home_bonus = if is_home(at) { 0.5 } else { 0.0 };
    cell.wumpus + cell.pit - gold_bonus - home_bonus
}

/// Unvisited cells orthogonally adjacent to a visited one, in scan order.
pub fn frontier(knowledge: &Knowledge, order: ScanOrder) -> Vec<Coord> {
    let bounds = knowledge.bounds();
    let visited = knowledge.visited();

    let mut out = Vec::new();
    for y in 0..bounds.height {
        let mut row: Vec<i32> = (0..bounds.width).collect();
        if order == ScanOrder::XDescending {
            row.reverse();
        }
        for x in row {
            let c = Coord::new(x, y);
            if visited.contains(c) {
                continue;
            }
            if bounds.neighbors(c).any(|n| visited.contains(n)) {
                out.push(c);
            }
        }
    }
    out
}

/// Least-dangerous frontier cell with its danger, or `None` when the frontier is empty.
pub fn select_target(knowledge: &Knowledge, order: ScanOrder) -> Option<(Coord, f64)> {
    let mut best: Option<(Coord, f64)> = None;
    for c in frontier(knowledge, order) {
        let d = danger(&knowledge.beliefs().get(c), c);
        match best {
            Some((_, least)) if d >= least => {}
            _ => best = Some((c, d)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likely_gold_is_amplified() {
        let cell = BeliefCell {
            gold: 1.0,
            ..BeliefCell::default()
        };
        assert_eq!(danger(&cell, Coord::new(3, 3)), -2.0);

        let faint = BeliefCell {
            gold: 0.25,
            ..BeliefCell::default()
        };
        assert_eq!(danger(&faint, Coord::new(3, 3)), -0.125);
    }

    #[test]
    fn scan_order_parses_its_own_name() {
        for order in [ScanOrder::XAscending, ScanOrder::XDescending] {
            assert_eq!(order.as_str().parse::<ScanOrder>(), Ok(order));
        }
        assert!("y_first".parse::<ScanOrder>().is_err());
    }

    #[test]
    fn home_block_gets_a_bonus() {
        let zero = BeliefCell::default();
        assert_eq!(danger(&zero, Coord::new(1, 1)), -0.5);
        assert_eq!(danger(&zero, Coord::new(2, 1)), 0.0);
    }
}
