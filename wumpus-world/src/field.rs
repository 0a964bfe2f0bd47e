use wumpus_core::{Bounds, Coord, DeterministicRng, Grid, Perceptions, Tile, TileGrid, MIN_SIDE};

use crate::{Result, WorldError};

/// Cells kept hazard-free around the start.
pub const START_BLOCK: [Coord; 4] = [
    Coord::new(0, 0),
    Coord::new(0, 1),
    Coord::new(1, 0),
    Coord::new(1, 1),
];

pub fn pit_count(bounds: Bounds) -> usize {
    bounds.area() / 8
}

pub(crate) fn check_size(width: i32, height: i32) -> Result<()> {
    if width < MIN_SIDE || height < MIN_SIDE {
        return Err(WorldError::FieldTooSmall {
            width,
            height,
            min: MIN_SIDE,
        });
    }
    Ok(())
}

/// One wumpus, one gold and `width * height / 8` pits, never overlapping and
/// never inside [`START_BLOCK`].
pub fn generate_field(
    width: i32,
    height: i32,
    rng: &mut impl DeterministicRng,
) -> Result<TileGrid> {
    check_size(width, height)?;
    let bounds = Bounds::new(width, height);
    let mut field = Grid::filled(bounds, Tile::Empty);
    let mut taken: Vec<Coord> = START_BLOCK.to_vec();

    let hazards = [Tile::Wumpus, Tile::Gold]
        .into_iter()
        .chain(std::iter::repeat(Tile::Pit).take(pit_count(bounds)));
    for tile in hazards {
        let pos = pick_free(bounds, &taken, rng);
        field.set(pos, tile);
        taken.push(pos);
    }

    Ok(field)
}

/// Uniformly random cell not in `taken`. Terminates because at most
/// `4 + 2 + area / 8` cells are ever taken on a field of at least 3x3.
fn pick_free(bounds: Bounds, taken: &[Coord], rng: &mut impl DeterministicRng) -> Coord {
    loop {
        let pos = rng.next_coord(bounds);
        if !taken.contains(&pos) {
            return pos;
        }
    }
}

/// What a player standing on `pos` senses from its in-bounds neighbours.
pub fn perceptions_at(field: &TileGrid, pos: Coord) -> Perceptions {
    field
        .bounds()
        .neighbors(pos)
        .filter_map(|n| field.get(n).and_then(|t| t.signal()))
        .collect()
}
