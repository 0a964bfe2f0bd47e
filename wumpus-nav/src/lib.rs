//! Grid path planning restricted to a caller-supplied traversable set.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod astar;
pub mod path;

pub use astar::find_path;
pub use path::Path;
