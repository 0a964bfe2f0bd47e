use thiserror::Error;
use wumpus_core::{Bounds, Coord};
use wumpus_logic::EngineError;
use wumpus_nav::Path;

use crate::{BeliefGrid, VisitedSet};

/// Failure talking to a reasoning back-end.
///
/// "No route" is not an error; [`Reasoner::next_path`] reports it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ReasonerError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Unexpected answer to {query}: {detail}")]
    UnexpectedAnswer { query: &'static str, detail: String },
}

/// The two questions a delegated agent asks.
///
/// Calls block until answered; `&mut self` keeps a single query in flight.
pub trait Reasoner {
    /// Next exploration goal.
    fn next_target(
        &mut self,
        beliefs: &BeliefGrid,
        visited: &VisitedSet,
        bounds: Bounds,
    ) -> Result<Coord, ReasonerError>;

    /// Route from `start` to `target` through visited cells, starting at `start`.
    /// `Ok(None)` when the target cannot be reached.
    fn next_path(
        &mut self,
        start: Coord,
        target: Coord,
        visited: &VisitedSet,
    ) -> Result<Option<Path>, ReasonerError>;
}
