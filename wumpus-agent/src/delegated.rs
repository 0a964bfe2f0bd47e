use wumpus_core::{Coord, Environment};
use wumpus_nav::Path;

use crate::{Agent, Knowledge, Reasoner, Strategy};

#[derive(Debug, Clone)]
struct RouteCache {
    target: Coord,
    path: Path,
}

/// Hands target and route decisions to a [`Reasoner`].
///
/// The last route is cached and followed for as long as the target stays the
/// same and the agent is still on it, so a route costs one path query.
#[derive(Debug)]
pub struct DelegatedAgent<R> {
    knowledge: Knowledge,
    reasoner: R,
    cache: Option<RouteCache>,
}

impl<R: Reasoner> DelegatedAgent<R> {
    /// Fresh agent for `env`, with the player's start cell already visited.
    pub fn new(env: &dyn Environment, reasoner: R) -> Self {
        let mut agent = Self {
            knowledge: Knowledge::new(env.bounds()),
            reasoner,
            cache: None,
        };
        agent.add_visited(env, env.player_position());
        agent
    }

    pub fn reasoner(&self) -> &R {
        &self.reasoner
    }

    /// The route currently being followed, if any.
    pub fn cached_path(&self) -> Option<&Path> {
        self.cache.as_ref().map(|c| &c.path)
    }

    fn cached_step(&self, here: Coord, target: Coord) -> Option<Coord> {
        let cache = self.cache.as_ref()?;
        if cache.target != target {
            return None;
        }
        cache.path.step_after(here)
    }
}

impl<R: Reasoner> Agent for DelegatedAgent<R> {
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

        let knowledge = &self.knowledge;
        match self
            .reasoner
            .next_target(knowledge.beliefs(), knowledge.visited(), knowledge.bounds())
        {
            Ok(target) => {
                tracing::debug!(x = target.x, y = target.y, "engine selected target");
                target
            }
            Err(err) => {
                tracing::warn!(error = %err, "target query failed; holding");
                here
            }
        }
    }

    fn next_move(&mut self, env: &dyn Environment) -> Coord {
        let here = env.player_position();
        self.add_visited(env, here);

        let target = self.next_target(env);
        if target == here {
            return here;
        }
        if let Some(step) = self.cached_step(here, target) {
            tracing::trace!(x = step.x, y = step.y, "following cached route");
            return step;
        }

        match self.reasoner.next_path(here, target, self.knowledge.visited()) {
            Ok(Some(path)) => {
                let step = path.step_after(here).unwrap_or(here);
                self.cache = Some(RouteCache { target, path });
                step
            }
            Ok(None) => {
                tracing::debug!(x = target.x, y = target.y, "no route to target; holding");
                self.cache = None;
                here
            }
            Err(err) => {
                tracing::warn!(error = %err, "path query failed; holding");
                self.cache = None;
                here
            }
        }
    }

    fn strategy(&self) -> Strategy {
        Strategy::Delegated
    }
}
