use wumpus_core::{Coord, Environment};
use wumpus_nav::find_path;

use crate::{select_target, Agent, Knowledge, ScanOrder, Strategy};

/// Picks targets with the danger heuristic and routes with A*.
#[derive(Debug, Clone)]
pub struct LocalAgent {
    knowledge: Knowledge,
    scan_order: ScanOrder,
}

impl LocalAgent {
    /// Fresh agent for `env`, with the player's start cell already visited.
    pub fn new(env: &dyn Environment) -> Self {
        Self::with_scan_order(env, ScanOrder::default())
    }

    pub fn with_scan_order(env: &dyn Environment, scan_order: ScanOrder) -> Self {
        let mut agent = Self {
            knowledge: Knowledge::new(env.bounds()),
            scan_order,
        };
        agent.add_visited(env, env.player_position());
        agent
    }

    pub fn scan_order(&self) -> ScanOrder {
        self.scan_order
    }
}

impl Agent for LocalAgent {
    fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    fn knowledge_mut(&mut self) -> &mut Knowledge {
        &mut self.knowledge
    }

    fn next_target(&mut self, env: &dyn Environment) -> Coord {
        let here = env.player_position();
        if env.player_has_gold() {
            return here;
        }

        match select_target(&self.knowledge, self.scan_order) {
            Some((target, danger)) => {
                tracing::debug!(x = target.x, y = target.y, danger, "selected target");
                target
            }
            None => {
                tracing::debug!("frontier exhausted; holding");
                here
            }
        }
    }

    fn next_move(&mut self, env: &dyn Environment) -> Coord {
        let here = env.player_position();
        self.add_visited(env, here);

        let target = self.next_target(env);
        let knowledge = &self.knowledge;
        let path = find_path(knowledge.bounds(), here, target, |c| {
            knowledge.traversable(c, target)
        });

        path.first_step().unwrap_or(here)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Local
    }
}
