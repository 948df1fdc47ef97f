//! Reasoning orchestrator.
//!
//! Two states, both terminal in one step:
//!
//! - **Primary**: construct a symbolic adapter and run it.
//! - **Fallback**: transcript-scoped extraction plus the heuristic
//!   reasoner from `sleuth-core`.
//!
//! Failure is a first-class transition, not a caught panic: an
//! unavailable backend moves to Fallback quietly, a runtime failure
//! moves there with its cause logged. The caller always receives a
//! well-formed result.

use std::path::Path;
use std::sync::Arc;

use sleuth_core::{fallback_analysis, InterrogationPayload, ReasoningResult};

use crate::adapter::{AdapterError, SymbolicAdapter};
use crate::engine::EngineRegistry;
use crate::rules::load_rules;

pub struct Orchestrator {
    registry: Arc<EngineRegistry>,
    /// `None` means the rule program could not be read; Primary is
    /// skipped permanently.
    rules_text: Option<String>,
}

impl Orchestrator {
    /// Build with an in-memory rule program.
    pub fn new(registry: Arc<EngineRegistry>, rules_text: impl Into<String>) -> Self {
        Self {
            registry,
            rules_text: Some(rules_text.into()),
        }
    }

    /// Build from a rule-program file. An unreadable file is
    /// equivalent to Backend Unavailable: the orchestrator still
    /// serves, heuristic-only.
    pub fn from_rules_path(registry: Arc<EngineRegistry>, path: impl AsRef<Path>) -> Self {
        let rules_text = match load_rules(path.as_ref()) {
            Ok(text) => Some(text),
            Err(error) => {
                tracing::debug!(
                    path = %path.as_ref().display(),
                    %error,
                    "rule program unavailable, heuristic fallback only"
                );
                None
            }
        };
        Self {
            registry,
            rules_text,
        }
    }

    /// Analyze one payload. Never fails and never panics; the worst
    /// case is an empty lead list at the baseline score, which is
    /// indistinguishable from "nothing notable found".
    pub fn analyze(&self, payload: &InterrogationPayload) -> ReasoningResult {
        if let Some(rules) = &self.rules_text {
            match self.try_symbolic(rules, payload) {
                Ok(result) => return result,
                Err(AdapterError::Unavailable(reason)) => {
                    tracing::debug!(%reason, "symbolic backend unavailable, using fallback");
                }
                Err(error) => {
                    tracing::warn!(%error, "symbolic backend failed, using fallback");
                }
            }
        }

        fallback_analysis(payload)
    }

    fn try_symbolic(
        &self,
        rules: &str,
        payload: &InterrogationPayload,
    ) -> Result<ReasoningResult, AdapterError> {
        // Fresh engine per call; no cross-call engine state.
        let mut adapter = SymbolicAdapter::new(&self.registry, rules)?;
        let (leads, consistency) = adapter.run_reasoning(payload)?;
        Ok(ReasoningResult { leads, consistency })
    }
}
