use core::cmp::Ordering;
use std::collections::BinaryHeap;

use wumpus_core::{Bounds, Coord};

use crate::Path;

#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    cell: Coord,
    tie: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u64) {
        (self.f, self.tie)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

/// Shortest 4-connected path from `from` to `to`, stepping only onto in-bounds
/// cells for which `traversable` holds.
///
/// The start cell itself is not checked against `traversable`. Equal `f` scores
/// are expanded in admission order, so the result is stable for identical input.
/// When `to` is unreachable the degenerate path `[from]` is returned.
pub fn find_path<F>(bounds: Bounds, from: Coord, to: Coord, traversable: F) -> Path
where
    F: Fn(Coord) -> bool,
{
    if from == to {
        return Path::stay(from);
    }
    let (Some(start_idx), Some(goal_idx)) = (bounds.index(from), bounds.index(to)) else {
        return Path::stay(from);
    };

    let len = bounds.area();
    let mut g_score = vec![u32::MAX; len];
    let mut f_score = vec![u32::MAX; len];
    let mut came_from: Vec<Option<usize>> = vec![None; len];
    let mut open = BinaryHeap::<OpenNode>::new();
    let mut tie: u64 = 0;

    g_score[start_idx] = 0;
    f_score[start_idx] = from.manhattan(to);
    open.push(OpenNode {
        f: f_score[start_idx],
        g: 0,
        cell: from,
        tie,
    });
    tie += 1;

    while let Some(node) = open.pop() {
        let Some(node_idx) = bounds.index(node.cell) else {
            continue;
        };
        if node.g != g_score[node_idx] {
            // Superseded by a cheaper admission; not an open-set member any more.
            continue;
        }
        if node_idx == goal_idx {
            return Path::new(reconstruct(bounds, &came_from, goal_idx));
        }

        for n in bounds.neighbors(node.cell) {
            if !traversable(n) {
                continue;
            }
            let Some(n_idx) = bounds.index(n) else { continue };
            let tentative_g = node.g.saturating_add(1);
            if tentative_g >= g_score[n_idx] {
                continue;
            }
            came_from[n_idx] = Some(node_idx);
            g_score[n_idx] = tentative_g;
            f_score[n_idx] = tentative_g.saturating_add(n.manhattan(to));
            open.push(OpenNode {
                f: f_score[n_idx],
                g: tentative_g,
                cell: n,
                tie,
            });
            tie += 1;
        }
    }

    Path::stay(from)
}

fn reconstruct(bounds: Bounds, came_from: &[Option<usize>], mut current: usize) -> Vec<Coord> {
    let mut out = vec![bounds.coord(current)];
    while let Some(prev) = came_from[current] {
        current = prev;
        out.push(bounds.coord(current));
    }
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_cell_is_degenerate() {
        let p = find_path(Bounds::new(3, 3), Coord::ORIGIN, Coord::ORIGIN, |_| true);
        assert_eq!(p.cells(), &[Coord::ORIGIN]);
    }

    #[test]
    fn out_of_bounds_goal_is_degenerate() {
        let p = find_path(Bounds::new(3, 3), Coord::ORIGIN, Coord::new(5, 0), |_| true);
        assert_eq!(p.cells(), &[Coord::ORIGIN]);
    }
}
