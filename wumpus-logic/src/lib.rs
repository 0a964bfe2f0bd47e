//! # wumpus-logic
//!
//! A small declarative rule engine. Callers build a [`Query`] out of
//! [`Term`]s, leave output slots as variables, and get back either a set of
//! [`Bindings`] or [`Answer::NoSolution`].
//!
//! ## Built-in predicates
//!
//! - `next_target(Beliefs, Visited, Width, Height, Target)`
//! - `next_path(Start, Goal, Visited, Path)`
//!
//! ## Example
//!
//! ```rust
//! use wumpus_logic::*;
//!
//! let mut engine = RuleEngine::default();
//! let visited = Term::list(vec![Term::pos(0, 0), Term::pos(1, 0)]);
//! let query = Query::new(
//!     "next_path",
//!     vec![Term::pos(0, 0), Term::pos(1, 1), visited, Term::var("Path")],
//! );
//!
//! // (1, 1) is the goal, so it is allowed even though it was never visited.
//! let answer = engine.query(&query).unwrap();
//! assert!(answer.is_solved());
//! ```

pub mod engine;
pub mod query;
pub mod rules;
pub mod term;

pub use engine::*;
pub use query::*;
pub use rules::*;
pub use term::*;

use thiserror::Error;

/// Errors raised while evaluating a query.
///
/// A query that is well-formed but has no answer is not an error; it yields
/// [`Answer::NoSolution`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown predicate: {0}")]
    UnknownPredicate(String),

    #[error("Arity mismatch for {name}: expected {expected}, got {actual}")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Malformed argument {index} of {predicate}: {reason}")]
    MalformedArgument {
        predicate: String,
        index: usize,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
