//! Built-in predicates.
//!
//! Both rules are written as fact derivations over their arguments:
//!
//! ```text
//! frontier(C)      :- adjacent(C, V), visited(V), \+ visited(C).
//! danger(C, D)     :- belief(C, W, P, G), gold_bonus(G, GB), home_bonus(C, HB),
//!                     D is W + P - GB - HB.
//! next_target(T)   :- frontier(T), danger(T, D), \+ (frontier(O), danger(O, E), E < D).
//!
//! safe(C)          :- visited(C) ; C = Goal.
//! next_path(S, G, P) :- shortest chain of adjacent safe cells from S to G.
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use crate::engine::Predicate;
use crate::{Answer, EngineError, Result, Term};

type Pos = (i64, i64);

fn neighbors((x, y): Pos) -> [Pos; 4] {
    [(x, y - 1), (x + 1, y), (x, y + 1), (x - 1, y)]
}

fn malformed(predicate: &str, index: usize, reason: impl Into<String>) -> EngineError {
    EngineError::MalformedArgument {
        predicate: predicate.to_string(),
        index,
        reason: reason.into(),
    }
}

fn decode_pos(predicate: &str, index: usize, term: &Term) -> Result<Pos> {
    term.as_pos()
        .ok_or_else(|| malformed(predicate, index, format!("expected pos(X,Y), got {term}")))
}

fn decode_positions(predicate: &str, index: usize, term: &Term) -> Result<HashSet<Pos>> {
    let items = term
        .as_list()
        .ok_or_else(|| malformed(predicate, index, "expected a list of pos(X,Y)"))?;
    items.iter().map(|t| decode_pos(predicate, index, t)).collect()
}

fn arity_mismatch(predicate: &str, expected: usize, args: &[Term]) -> EngineError {
    EngineError::ArityMismatch {
        name: predicate.to_string(),
        expected,
        actual: args.len(),
    }
}

fn decode_dimension(predicate: &str, index: usize, term: &Term) -> Result<i64> {
    match term.as_int() {
        Some(v) if v > 0 => Ok(v),
        _ => Err(malformed(predicate, index, "expected a positive integer")),
    }
}

/// Per-cell `(wumpus, pit, gold)` scores, row-major.
struct BeliefFacts {
    width: i64,
    cells: Vec<(f64, f64, f64)>,
}

impl BeliefFacts {
    fn decode(predicate: &str, index: usize, term: &Term, width: i64, height: i64) -> Result<Self> {
        let rows = term
            .as_list()
            .ok_or_else(|| malformed(predicate, index, "expected a list of rows"))?;
        if rows.len() as i64 != height {
            return Err(malformed(
                predicate,
                index,
                format!("expected {height} rows, got {}", rows.len()),
            ));
        }

        // Row lengths are checked one by one, so nothing is sized from `width` up front.
        let mut cells = Vec::new();
        for row in rows {
            let row = row
                .as_list()
                .filter(|r| r.len() as i64 == width)
                .ok_or_else(|| {
                    malformed(predicate, index, format!("expected rows of {width} cells"))
                })?;
            for cell in row {
                cells.push(decode_cell(cell).ok_or_else(|| {
                    malformed(predicate, index, format!("expected cell(W,P,G), got {cell}"))
                })?);
            }
        }
        Ok(Self { width, cells })
    }

    fn get(&self, (x, y): Pos) -> (f64, f64, f64) {
        self.cells[(y * self.width + x) as usize]
    }
}

fn decode_cell(term: &Term) -> Option<(f64, f64, f64)> {
    match term.as_compound()? {
        ("cell", [w, p, g]) => Some((w.as_float()?, p.as_float()?, g.as_float()?)),
        _ => None,
    }
}

/// `next_target(Beliefs, Visited, Width, Height, Target)`
///
/// Scans rows top to bottom, x ascending; the first strictly least-dangerous
/// frontier cell wins. No frontier means no solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextTarget;

impl NextTarget {
    fn danger(beliefs: &BeliefFacts, cell: Pos) -> f64 {
        let (wumpus, pit, gold) = beliefs.get(cell);
        let gold_bonus = if gold > 0.5 { gold * 2.0 } else { gold / 2.0 };
        let home_bonus = if cell.0 <= 1 && cell.1 <= 1 { 0.5 } else { 0.0 };
        wumpus + pit - gold_bonus - home_bonus
    }
}

impl Predicate for NextTarget {
    fn name(&self) -> &'static str {
        "next_target"
    }

    fn arity(&self) -> usize {
        5
    }

    fn solve(&self, args: &[Term]) -> Result<Answer> {
        let name = self.name();
        let [beliefs, visited, width, height, target] = args else {
            return Err(arity_mismatch(name, self.arity(), args));
        };
        let visited = decode_positions(name, 1, visited)?;
        let width = decode_dimension(name, 2, width)?;
        let height = decode_dimension(name, 3, height)?;
        let beliefs = BeliefFacts::decode(name, 0, beliefs, width, height)?;

        let mut best: Option<(Pos, f64)> = None;
        for y in 0..height {
            for x in 0..width {
                let cell = (x, y);
                if visited.contains(&cell) {
                    continue;
                }
                if !neighbors(cell).iter().any(|n| visited.contains(n)) {
                    continue;
                }
                let danger = Self::danger(&beliefs, cell);
                match best {
                    Some((_, least)) if danger >= least => {}
                    _ => best = Some((cell, danger)),
                }
            }
        }

        Ok(match best {
            Some(((x, y), _)) => Answer::unify(target, Term::pos(x, y)),
            None => Answer::NoSolution,
        })
    }
}

/// `next_path(Start, Goal, Visited, Path)`
///
/// Breadth-first over visited cells plus the goal; `Path` starts at `Start`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextPath;

impl Predicate for NextPath {
    fn name(&self) -> &'static str {
        "next_path"
    }

    fn arity(&self) -> usize {
        4
    }

    fn solve(&self, args: &[Term]) -> Result<Answer> {
        let name = self.name();
        let [start, goal, visited, path] = args else {
            return Err(arity_mismatch(name, self.arity(), args));
        };
        let start = decode_pos(name, 0, start)?;
        let goal = decode_pos(name, 1, goal)?;
        let visited = decode_positions(name, 2, visited)?;

        let Some(cells) = breadth_first(start, goal, |c| c == goal || visited.contains(&c)) else {
            return Ok(Answer::NoSolution);
        };

        let route = Term::list(cells.into_iter().map(|(x, y)| Term::pos(x, y)).collect());
        Ok(Answer::unify(path, route))
    }
}

fn breadth_first(start: Pos, goal: Pos, safe: impl Fn(Pos) -> bool) -> Option<Vec<Pos>> {
    let mut parent: HashMap<Pos, Pos> = HashMap::new();
    let mut seen: HashSet<Pos> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            let mut out = vec![current];
            let mut at = current;
            while let Some(prev) = parent.get(&at) {
                at = *prev;
                out.push(at);
            }
            out.reverse();
            return Some(out);
        }
        for n in neighbors(current) {
            if !safe(n) || !seen.insert(n) {
                continue;
            }
            parent.insert(n, current);
            queue.push_back(n);
        }
    }
    None
}
