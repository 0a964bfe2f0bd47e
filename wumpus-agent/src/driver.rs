use wumpus_core::{Coord, EnvironmentMut};

use crate::Agent;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// Reached the gold.
    Won,
    /// Walked into a pit or the wumpus.
    Lost,
    /// The agent chose to hold position.
    Stalled,
    /// The environment refused the requested step.
    Rejected(Coord),
    TurnLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EpisodeReport {
    pub outcome: Outcome,
    pub turns: u32,
    /// Every position occupied, starting with the initial one.
    pub trail: Vec<Coord>,
    pub has_gold: bool,
}

/// Drive `agent` through `env` until the game ends, the agent stops moving,
/// or `max_turns` moves have been made.
pub fn run_episode<E>(env: &mut E, agent: &mut dyn Agent, max_turns: u32) -> EpisodeReport
where
    E: EnvironmentMut,
{
    let mut trail = vec![env.player_position()];
    let mut turns = 0;

    let outcome = loop {
        if env.game_over() {
            break if env.player_has_gold() {
                Outcome::Won
            } else {
                Outcome::Lost
            };
        }
        if turns >= max_turns {
            break Outcome::TurnLimit;
        }

        let here = env.player_position();
        let step = agent.next_move(&*env);
        if step == here {
            break Outcome::Stalled;
        }
        if !env.move_player(step) {
            tracing::warn!(x = step.x, y = step.y, "move rejected");
            break Outcome::Rejected(step);
        }

        turns += 1;
        trail.push(step);
        tracing::debug!(turn = turns, x = step.x, y = step.y, "moved");
    };

    tracing::info!(
        strategy = %agent.strategy(),
        ?outcome,
        turns,
        "episode finished"
    );

    EpisodeReport {
        outcome,
        turns,
        trail,
        has_gold: env.player_has_gold(),
    }
}
