//! Deterministic grid primitives and environment contracts for the Wumpus explorer.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod coord;
pub mod grid;
pub mod rng;
pub mod tile;
pub mod world;

pub use coord::{Bounds, Coord};
pub use grid::Grid;
pub use rng::{DeterministicRng, SplitMix64};
pub use tile::{Perception, Perceptions, Tile, TileGrid};
pub use world::{Environment, EnvironmentMut, MIN_SIDE};
