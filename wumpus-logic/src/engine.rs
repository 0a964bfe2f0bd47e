//! Query dispatch.

use std::collections::BTreeMap;

use crate::rules::{NextPath, NextTarget};
use crate::{Answer, EngineError, Query, Result, Term};

/// Anything that can answer a [`Query`].
///
/// Calls are blocking and take `&mut self`, so a caller can never have two
/// queries in flight against the same engine.
pub trait Engine {
    fn query(&mut self, query: &Query) -> Result<Answer>;
}

/// A named rule with fixed arity.
pub trait Predicate {
    fn name(&self) -> &'static str;
    fn arity(&self) -> usize;
    fn solve(&self, args: &[Term]) -> Result<Answer>;
}

/// Engine backed by a registry of [`Predicate`]s.
pub struct RuleEngine {
    predicates: BTreeMap<&'static str, Box<dyn Predicate>>,
    queries_issued: u64,
}

impl Default for RuleEngine {
    fn default() -> Self {
        let mut engine = Self::empty();
        engine.register(NextTarget);
        engine.register(NextPath);
        engine
    }
}

impl core::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("predicates", &self.predicates.keys().collect::<Vec<_>>())
            .field("queries_issued", &self.queries_issued)
            .finish()
    }
}

impl RuleEngine {
    /// Engine with no predicates registered.
    pub fn empty() -> Self {
        Self {
            predicates: BTreeMap::new(),
            queries_issued: 0,
        }
    }

    /// Register a predicate, replacing any previous one with the same name.
    pub fn register(&mut self, predicate: impl Predicate + 'static) {
        self.predicates.insert(predicate.name(), Box::new(predicate));
    }

    pub fn has_predicate(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Number of queries dispatched so far, successful or not.
    pub fn queries_issued(&self) -> u64 {
        self.queries_issued
    }

    /// Answer a JSON-encoded [`Query`] with a JSON-encoded [`Answer`].
    pub fn query_json(&mut self, json: &str) -> Result<String> {
        let query: Query = serde_json::from_str(json)?;
        let answer = self.query(&query)?;
        Ok(serde_json::to_string(&answer)?)
    }
}

impl Engine for RuleEngine {
    fn query(&mut self, query: &Query) -> Result<Answer> {
        self.queries_issued += 1;

        let predicate = self
            .predicates
            .get(query.predicate.as_str())
            .ok_or_else(|| EngineError::UnknownPredicate(query.signature()))?;

        if predicate.arity() != query.arity() {
            return Err(EngineError::ArityMismatch {
                name: query.predicate.clone(),
                expected: predicate.arity(),
                actual: query.arity(),
            });
        }

        predicate.solve(&query.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_has_builtins() {
        let engine = RuleEngine::default();
        assert!(engine.has_predicate("next_target"));
        assert!(engine.has_predicate("next_path"));
        assert!(!RuleEngine::empty().has_predicate("next_path"));
    }

    #[test]
    fn unknown_predicate_is_an_error() {
        let mut engine = RuleEngine::default();
        let err = engine
            .query(&Query::new("shoot_arrow", vec![Term::var("X")]))
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownPredicate(ref s) if s == "shoot_arrow/1"));
        assert_eq!(engine.queries_issued(), 1);
    }

    #[test]
    fn arity_is_checked() {
        let mut engine = RuleEngine::default();
        let err = engine
            .query(&Query::new("next_path", vec![Term::var("X")]))
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::ArityMismatch {
                expected: 4,
                actual: 1,
                ..
            }
        ));
    }
}
