//! Reference Wumpus world.
//!
//! Implements the [`Environment`](wumpus_core::Environment) contracts so agents
//! can be exercised end to end. Field generation is seeded and deterministic.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod field;
pub mod world;

pub use field::{generate_field, perceptions_at, pit_count, START_BLOCK};
pub use world::{GameStatus, LossCause, World};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("Field must be at least {min}x{min}, got {width}x{height}")]
    FieldTooSmall { width: i32, height: i32, min: i32 },
}

pub type Result<T> = std::result::Result<T, WorldError>;
