//! Queries and their answers.

use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Term;

/// A goal `predicate(args...)`. Output slots are [`Term::Var`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub predicate: String,
    pub args: Vec<Term>,
}

impl Query {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Self {
            predicate: predicate.into(),
            args,
        }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// `name/arity`
    pub fn signature(&self) -> String {
        format!("{}/{}", self.predicate, self.arity())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Term::compound(self.predicate.clone(), self.args.clone()))
    }
}

/// Variable name -> bound value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bindings(BTreeMap<String, Term>);

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, var: impl Into<String>, value: Term) {
        self.0.insert(var.into(), value);
    }

    pub fn get(&self, var: &str) -> Option<&Term> {
        self.0.get(var)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Answer {
    Solved(Bindings),
    NoSolution,
}

impl Answer {
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    pub fn bindings(&self) -> Option<&Bindings> {
        match self {
            Self::Solved(b) => Some(b),
            Self::NoSolution => None,
        }
    }

    /// Bind `value` to the output slot `slot`.
    ///
    /// A variable slot is bound; a ground slot succeeds only when it equals `value`.
    pub fn unify(slot: &Term, value: Term) -> Self {
        match slot {
            Term::Var(name) => {
                let mut bindings = Bindings::new();
                bindings.bind(name.clone(), value);
                Self::Solved(bindings)
            }
            ground if *ground == value => Self::Solved(Bindings::new()),
            _ => Self::NoSolution,
        }
    }
}
