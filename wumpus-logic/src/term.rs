//! Term representation shared by queries and answers.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A ground value or an unbound variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Term {
    Int(i64),
    Float(f64),
    Atom(String),
    /// Unbound output slot, named so the answer can bind it.
    Var(String),
    List(Vec<Term>),
    /// `functor(args...)`
    Compound(String, Vec<Term>),
}

impl Term {
    pub fn int(v: i64) -> Self {
        Self::Int(v)
    }

    pub fn float(v: f64) -> Self {
        Self::Float(v)
    }

    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn list(items: Vec<Term>) -> Self {
        Self::List(items)
    }

    pub fn compound(functor: impl Into<String>, args: Vec<Term>) -> Self {
        Self::Compound(functor.into(), args)
    }

    /// `pos(X, Y)`
    pub fn pos(x: i64, y: i64) -> Self {
        Self::compound("pos", vec![Self::Int(x), Self::Int(y)])
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Self::Var(_))
    }

    /// True when no variable occurs anywhere inside the term.
    pub fn is_ground(&self) -> bool {
        match self {
            Self::Var(_) => false,
            Self::List(items) | Self::Compound(_, items) => items.iter().all(Term::is_ground),
            _ => true,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Integers widen to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Term]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<(&str, &[Term])> {
        match self {
            Self::Compound(f, args) => Some((f.as_str(), args.as_slice())),
            _ => None,
        }
    }

    /// Decode `pos(X, Y)`.
    pub fn as_pos(&self) -> Option<(i64, i64)> {
        match self.as_compound()? {
            ("pos", [x, y]) => Some((x.as_int()?, y.as_int()?)),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Atom(a) => write!(f, "{a}"),
            Self::Var(v) => write!(f, "{v}"),
            Self::List(items) => {
                write!(f, "[")?;
                write_args(f, items)?;
                write!(f, "]")
            }
            Self::Compound(functor, args) => {
                write!(f, "{functor}(")?;
                write_args(f, args)?;
                write!(f, ")")
            }
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Term]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}
