//! # sleuth-runtime
//!
//! Optional symbolic reasoning runtime for Sleuth.
//!
//! `sleuth-core` is fully deterministic and never consults an engine.
//! This crate adds the seam for an external rule engine (facts in,
//! matched terms out) and the orchestrator that prefers it:
//!
//! 1. **Primary** — build a fresh engine from the first available
//!    backend, submit the fact program, decode lead and consistency
//!    terms.
//! 2. **Fallback** — on an unavailable backend, an unreadable rule
//!    program, or any engine failure, run the heuristic path instead.
//!
//! The orchestrator's contract is that a caller always gets a
//! well-formed result; no error crosses [`Orchestrator::analyze`].
//!
//! No engine backend ships with this repository. Implement
//! [`EngineFactory`] for one and register it on the
//! [`EngineRegistry`] passed to the orchestrator.

pub mod adapter;
pub mod engine;
pub mod orchestrator;
pub mod rules;

// Re-export main types at crate root
pub use adapter::{AdapterError, SymbolicAdapter, CONSISTENCY_QUERY, LEAD_QUERY};
pub use engine::{Availability, EngineError, EngineFactory, EngineRegistry, RuleEngine, Term};
pub use orchestrator::Orchestrator;
pub use rules::{load_rules, RulesError, DEFAULT_RULES_PATH};
