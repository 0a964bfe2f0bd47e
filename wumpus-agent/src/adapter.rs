//! Marshaling between native grid types and engine terms.

use wumpus_core::{Bounds, Coord};
use wumpus_logic::{Answer, Engine, Query, RuleEngine, Term};
use wumpus_nav::Path;

use crate::{BeliefGrid, Reasoner, ReasonerError, VisitedSet};

const TARGET_VAR: &str = "Target";
const PATH_VAR: &str = "Path";

pub fn encode_coord(c: Coord) -> Term {
    Term::pos(c.x as i64, c.y as i64)
}

/// `None` for anything but `pos(X, Y)` with both components in `i32` range.
pub fn decode_coord(term: &Term) -> Option<Coord> {
    let (x, y) = term.as_pos()?;
    Some(Coord::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

/// Rows of `cell(Wumpus, Pit, Gold)`, `y` ascending.
pub fn encode_beliefs(beliefs: &BeliefGrid) -> Term {
    Term::list(
        beliefs
            .rows()
            .map(|row| {
                Term::list(
                    row.iter()
                        .map(|cell| {
                            Term::compound(
                                "cell",
                                vec![
                                    Term::float(cell.wumpus),
                                    Term::float(cell.pit),
                                    Term::float(cell.gold),
                                ],
                            )
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

pub fn encode_visited(visited: &VisitedSet) -> Term {
    Term::list(visited.iter().map(encode_coord).collect())
}

pub fn decode_path(term: &Term) -> Option<Path> {
    let cells = term
        .as_list()?
        .iter()
        .map(decode_coord)
        .collect::<Option<Vec<_>>>()?;
    Some(Path::new(cells))
}

/// [`Reasoner`] backed by a rule [`Engine`].
#[derive(Debug, Default)]
pub struct LogicReasoner<E = RuleEngine> {
    engine: E,
}

impl<E: Engine> LogicReasoner<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }
}

impl<E: Engine> Reasoner for LogicReasoner<E> {
    fn next_target(
        &mut self,
        beliefs: &BeliefGrid,
        visited: &VisitedSet,
        bounds: Bounds,
    ) -> Result<Coord, ReasonerError> {
        let query = Query::new(
            "next_target",
            vec![
                encode_beliefs(beliefs),
                encode_visited(visited),
                Term::int(bounds.width as i64),
                Term::int(bounds.height as i64),
                Term::var(TARGET_VAR),
            ],
        );

        let answer = self.engine.query(&query)?;
        let Some(bound) = answer.bindings().and_then(|b| b.get(TARGET_VAR)) else {
            // Nothing to derive: fall back to the origin.
            return Ok(Coord::ORIGIN);
        };
        decode_coord(bound).ok_or_else(|| ReasonerError::UnexpectedAnswer {
            query: "next_target",
            detail: format!("{TARGET_VAR} = {bound}"),
        })
    }

    fn next_path(
        &mut self,
        start: Coord,
        target: Coord,
        visited: &VisitedSet,
    ) -> Result<Option<Path>, ReasonerError> {
        let query = Query::new(
            "next_path",
            vec![
                encode_coord(start),
                encode_coord(target),
                encode_visited(visited),
                Term::var(PATH_VAR),
            ],
        );

        let bindings = match self.engine.query(&query)? {
            Answer::NoSolution => return Ok(None),
            Answer::Solved(bindings) => bindings,
        };
        let unexpected = |detail: String| ReasonerError::UnexpectedAnswer {
            query: "next_path",
            detail,
        };

        let term = bindings
            .get(PATH_VAR)
            .ok_or_else(|| unexpected(format!("{PATH_VAR} left unbound")))?;
        let path = decode_path(term).ok_or_else(|| unexpected(format!("{PATH_VAR} = {term}")))?;
        if path.start() != Some(start) {
            return Err(unexpected(format!("path does not start at {start}")));
        }
        Ok(Some(path))
    }
}
