//! Symbolic backend adapter.
//!
//! Drives a rule engine through one reasoning pass: compile the fact
//! program, submit it next to the pre-loaded rules, query for lead and
//! consistency terms, decode defensively. Errors propagate to the
//! orchestrator; the adapter itself never substitutes the heuristic
//! result.

use sleuth_core::{backend_facts, clamp_score, InterrogationPayload, Lead};

use crate::engine::{EngineError, EngineRegistry, RuleEngine, Term};

use thiserror::Error;

/// Query for investigative leads: `[title, tag1, tag2]` per match.
pub const LEAD_QUERY: &str = "(!lead ?title ?tag1 ?tag2)";
/// Query for the consistency score: one term, one numeric atom.
pub const CONSISTENCY_QUERY: &str = "(!consistency ?s)";

const DEFAULT_TITLE: &str = "Investigate inconsistency";
const DEFAULT_SCORE: f64 = 0.6;
const RULE_JUSTIFICATION: &str = "Derived from rule matches over conversation and evidence";
const SOLUTION_TAG: &str = "Solution";

/// Adapter failures. `Unavailable` is the one variant that is not an
/// application error: it means no backend exists to try.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("rule engine unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// One-shot reasoning pass over a freshly constructed engine.
pub struct SymbolicAdapter {
    engine: Box<dyn RuleEngine>,
}

impl std::fmt::Debug for SymbolicAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolicAdapter").finish_non_exhaustive()
    }
}

impl SymbolicAdapter {
    /// Construct with the given rule program, using the first
    /// available backend in `registry`.
    pub fn new(registry: &EngineRegistry, rules_text: &str) -> Result<Self, AdapterError> {
        let factory = registry
            .first_available()
            .map_err(AdapterError::Unavailable)?;
        let engine = factory.create(rules_text)?;
        Ok(Self { engine })
    }

    /// Run the full pass: facts in, decoded leads and score out.
    pub fn run_reasoning(
        &mut self,
        payload: &InterrogationPayload,
    ) -> Result<(Vec<Lead>, f64), AdapterError> {
        let facts = backend_facts(payload);
        if !facts.is_empty() {
            self.engine.run(&facts.join("\n"))?;
        }

        let lead_terms = self.engine.query(LEAD_QUERY)?;
        let leads = lead_terms.iter().map(decode_lead).collect();

        let score_terms = self.engine.query(CONSISTENCY_QUERY)?;
        let score = decode_consistency(&score_terms);

        Ok((leads, score))
    }
}

/// Decode one lead term. Short or malformed terms are defaulted, not
/// rejected: a missing title becomes a generic one, missing tags are
/// omitted, and every lead carries the closing `Solution` tag.
fn decode_lead(term: &Term) -> Lead {
    let title = term
        .atom(0)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let mut tags: Vec<String> = term
        .0
        .iter()
        .skip(1)
        .take(2)
        .filter(|t| !t.is_empty())
        .cloned()
        .collect();
    tags.push(SOLUTION_TAG.to_string());

    Lead {
        title,
        tags,
        justification: RULE_JUSTIFICATION.to_string(),
    }
}

/// Decode the consistency term: first atom of the first term as f64,
/// baseline on absence or parse failure, clamped either way.
fn decode_consistency(terms: &[Term]) -> f64 {
    let score = terms
        .first()
        .and_then(|t| t.atom(0))
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_SCORE);
    clamp_score(score)
}
