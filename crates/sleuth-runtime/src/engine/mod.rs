//! Rule-engine seam.
//!
//! The symbolic backend is a black box: a fact program goes in, result
//! terms come out. This module defines the seam an engine plugs into
//! and how its availability is reported. Availability is a value
//! checked up front, not a caught failure.

pub mod factory;

use thiserror::Error;

pub use factory::{EngineFactory, EngineRegistry};

/// Errors from an engine backend.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to load program: {0}")]
    Load(String),

    #[error("query failed: {0}")]
    Query(String),
}

/// A flat result tuple decoded from an engine query.
///
/// Atom order follows the query's variable order, e.g. a lead query
/// yields `[title, tag1, tag2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term(pub Vec<String>);

impl Term {
    pub fn atom(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Term {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Term(iter.into_iter().map(Into::into).collect())
    }
}

/// A loaded rule engine holding one rule program.
///
/// Instances are cheap and single-use: the orchestrator builds a fresh
/// one per call, so implementations need `Send` but no internal
/// synchronization.
pub trait RuleEngine: Send {
    /// Load an additional program (facts) into the engine space.
    fn run(&mut self, program: &str) -> Result<(), EngineError>;

    /// Evaluate a query and return every matched term.
    fn query(&mut self, query: &str) -> Result<Vec<Term>, EngineError>;
}

/// Whether an engine backend can be constructed right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable(String),
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_atoms() {
        let term: Term = ["Follow the money", "Means"].into_iter().collect();
        assert_eq!(term.atom(0), Some("Follow the money"));
        assert_eq!(term.atom(2), None);
        assert_eq!(term.len(), 2);
    }

    #[test]
    fn test_availability_tag() {
        assert!(Availability::Available.is_available());
        assert!(!Availability::Unavailable("library missing".to_string()).is_available());
    }
}
