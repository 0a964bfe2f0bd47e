use wumpus_core::{Coord, Environment, EnvironmentMut, Perceptions, SplitMix64, Tile, TileGrid};

use crate::field::{check_size, generate_field, perceptions_at};
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LossCause {
    Pit,
    Wumpus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Running,
    Won,
    Lost { cause: LossCause },
}

/// A single-player game on a fixed field. The player starts at the origin.
#[derive(Debug, Clone)]
pub struct World {
    field: TileGrid,
    player: Coord,
    has_gold: bool,
    status: GameStatus,
}

impl World {
    /// Random field from `seed`.
    pub fn generate(width: i32, height: i32, seed: u64) -> Result<Self> {
        let mut rng = SplitMix64::new(seed);
        let field = generate_field(width, height, &mut rng)?;
        tracing::debug!(width, height, seed, "generated field");
        Ok(Self::start(field))
    }

    /// Hand-built field. Only the size is validated.
    pub fn from_field(field: TileGrid) -> Result<Self> {
        check_size(field.width(), field.height())?;
        Ok(Self::start(field))
    }

    fn start(field: TileGrid) -> Self {
        Self {
            field,
            player: Coord::ORIGIN,
            has_gold: false,
            status: GameStatus::Running,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn tile(&self, c: Coord) -> Option<Tile> {
        self.field.get(c).copied()
    }
}

impl Environment for World {
    fn width(&self) -> i32 {
        self.field.width()
    }

    fn height(&self) -> i32 {
        self.field.height()
    }

    fn field(&self) -> &TileGrid {
        &self.field
    }

    fn player_position(&self) -> Coord {
        self.player
    }

    fn player_has_gold(&self) -> bool {
        self.has_gold
    }

    fn perceptions(&self) -> Perceptions {
        perceptions_at(&self.field, self.player)
    }

    fn game_over(&self) -> bool {
        self.status != GameStatus::Running
    }
}

impl EnvironmentMut for World {
    fn move_player(&mut self, pos: Coord) -> bool {
        if self.game_over() || !self.player.is_adjacent(pos) {
            return false;
        }
        let Some(tile) = self.tile(pos) else {
            return false;
        };

        self.player = pos;
        self.status = match tile {
            Tile::Empty => GameStatus::Running,
            Tile::Gold => {
                self.has_gold = true;
                GameStatus::Won
            }
            Tile::Pit => GameStatus::Lost {
                cause: LossCause::Pit,
            },
            Tile::Wumpus => GameStatus::Lost {
                cause: LossCause::Wumpus,
            },
        };
        if self.status != GameStatus::Running {
            tracing::debug!(x = pos.x, y = pos.y, status = ?self.status, "game over");
        }
        true
    }
}
