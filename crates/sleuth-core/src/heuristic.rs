//! Deterministic heuristic reasoner.
//!
//! Total function from claims to leads and a consistency score. Always
//! available, never fails; this is the guarantee the orchestrator
//! falls back on when the symbolic backend is missing or broken.
//!
//! Rule table (all matching rules fire, deltas accumulate, then clamp):
//!
//! | condition         | lead                                        | delta |
//! |-------------------|---------------------------------------------|-------|
//! | time and location | check the corridor camera                   | +0.10 |
//! | weapon            | verify letter opener provenance             | +0.10 |
//! | alibi             | validate alibi with an independent witness  | +0.05 |

use crate::claims::ClaimSet;
use crate::extract;
use crate::types::{InterrogationPayload, Lead, ReasoningResult};

/// Score before any rule fires. A no-claims transcript is neither
/// consistent nor inconsistent.
pub const BASE_SCORE: f64 = 0.6;

/// Clamp a score into the closed `[0.0, 1.0]` interval.
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}

/// Apply the rule table to a claim set.
pub fn reason(claims: &ClaimSet) -> ReasoningResult {
    let mut leads = Vec::new();
    let mut score = BASE_SCORE;

    if claims.mentions_time && claims.mentions_location {
        leads.push(Lead {
            title: "Check corridor camera near time of death".to_string(),
            tags: vec!["Witness".to_string(), "Opportunity".to_string()],
            justification:
                "User referenced a time and a location; cross-verify with available evidence."
                    .to_string(),
        });
        score += 0.10;
    }

    if claims.mentions_weapon {
        leads.push(Lead {
            title: "Verify letter opener provenance".to_string(),
            tags: vec!["Means".to_string()],
            justification: "Weapon provenance link could strengthen or dismiss suspicion."
                .to_string(),
        });
        score += 0.10;
    }

    if claims.mentions_alibi {
        leads.push(Lead {
            title: "Validate suspect alibi with independent witness".to_string(),
            tags: vec!["Witness".to_string()],
            justification: "Alibi requires third-party corroboration.".to_string(),
        });
        score += 0.05;
    }

    ReasoningResult {
        leads,
        consistency: clamp_score(score),
    }
}

/// The full fallback path: transcript-scoped extraction plus the rule
/// table. This is what the orchestrator runs when the symbolic
/// backend cannot.
pub fn fallback_analysis(payload: &InterrogationPayload) -> ReasoningResult {
    reason(&extract::claims_from_transcript(&payload.messages))
}
