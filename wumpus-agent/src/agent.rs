use wumpus_core::{Coord, Environment};

use crate::Knowledge;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One exploring agent.
///
/// The visited-set bookkeeping is shared; how a target and a move are chosen
/// is up to the implementation. Drivers hold a `Box<dyn Agent>` and never
/// need to know which strategy is behind it.
pub trait Agent {
    fn knowledge(&self) -> &Knowledge;
    fn knowledge_mut(&mut self) -> &mut Knowledge;

    /// Mark `pos` visited, folding the environment's current perceptions into
    /// the beliefs on first visit. Idempotent; returns whether `pos` was new.
    fn add_visited(&mut self, env: &dyn Environment, pos: Coord) -> bool {
        let perceptions = env.perceptions();
        let fresh = self.knowledge_mut().visit(pos, &perceptions);
        if fresh {
            tracing::trace!(
                x = pos.x,
                y = pos.y,
                perceptions = ?perceptions.to_vec(),
                "visited new cell"
            );
        }
        fresh
    }

    /// Goal cell for the current turn.
    fn next_target(&mut self, env: &dyn Environment) -> Coord;

    /// Immediate next step, or the current position to hold.
    fn next_move(&mut self, env: &dyn Environment) -> Coord;

    fn strategy(&self) -> Strategy;
}

/// Which reasoning back-end drives an agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Belief heuristics and A* in-process.
    #[default]
    Local,
    /// Target and route questions answered by a rule engine.
    Delegated,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Local => "local",
            Strategy::Delegated => "delegated",
        }
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Strategy::Local),
            "delegated" => Ok(Strategy::Delegated),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}
