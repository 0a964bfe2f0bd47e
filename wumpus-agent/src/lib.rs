//! Exploration agents for the Wumpus world.
//!
//! An [`Agent`] keeps a [`BeliefGrid`] and a [`VisitedSet`], and each turn
//! answers "where next?" from local evidence only. Two strategies implement
//! the trait: [`LocalAgent`] (danger heuristic + A*) and [`DelegatedAgent`]
//! (questions forwarded to a [`Reasoner`], e.g. the rule engine through
//! [`LogicReasoner`]).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod adapter;
pub mod agent;
pub mod belief;
pub mod delegated;
pub mod driver;
pub mod knowledge;
pub mod local;
pub mod reasoner;
pub mod target;

pub use adapter::LogicReasoner;
pub use agent::{Agent, Strategy};
pub use belief::{BeliefCell, BeliefGrid, EmptyFlag};
pub use delegated::DelegatedAgent;
pub use driver::{run_episode, EpisodeReport, Outcome};
pub use knowledge::{Knowledge, VisitedSet};
pub use local::LocalAgent;
pub use reasoner::{Reasoner, ReasonerError};
pub use target::{danger, frontier, select_target, ScanOrder};

use wumpus_core::Environment;
use wumpus_logic::RuleEngine;

/// Build an agent for `env` with the chosen strategy.
///
/// The delegated strategy is wired to the built-in rule engine, which always
/// scans with x ascending, so `scan_order` only affects the local strategy.
pub fn build_agent(
    strategy: Strategy,
    env: &dyn Environment,
    scan_order: ScanOrder,
) -> Box<dyn Agent> {
    match strategy {
        Strategy::Local => Box::new(LocalAgent::with_scan_order(env, scan_order)),
        Strategy::Delegated => Box::new(DelegatedAgent::new(
            env,
            LogicReasoner::new(RuleEngine::default()),
        )),
    }
}
