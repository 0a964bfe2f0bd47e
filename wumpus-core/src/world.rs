use crate::{Bounds, Coord, Perceptions, TileGrid};

/// Smallest legal side length of a field.
pub const MIN_SIDE: i32 = 3;

/// Read-only world access.
///
/// Agents only ever read the world through this trait; the driver owns the
/// write side.
pub trait Environment {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Ground-truth tiles. Agents must not peek; drivers and tests may.
    fn field(&self) -> &TileGrid;

    fn player_position(&self) -> Coord;
    fn player_has_gold(&self) -> bool;

    /// Perceptions at the player's current position.
    fn perceptions(&self) -> Perceptions;

    fn game_over(&self) -> bool;

    fn bounds(&self) -> Bounds {
        Bounds::new(self.width(), self.height())
    }
}

/// Write access.
pub trait EnvironmentMut: Environment {
    /// Returns `false` and leaves the world untouched when `pos` is not
    /// orthogonally adjacent to the player, is out of bounds, or the game is over.
    fn move_player(&mut self, pos: Coord) -> bool;
}
