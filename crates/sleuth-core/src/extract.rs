//! Fact and claim extraction.
//!
//! Two independent extraction paths, matching the two reasoners:
//!
//! - [`claims_from_transcript`] feeds the heuristic fallback. It scans
//!   only the interviewed party's messages and has no recency bound.
//! - [`backend_facts`] compiles a textual fact program for the
//!   symbolic rule engine. It scans the last 12 messages of every
//!   role, plus case-file structure and any caller-supplied claims.
//!
//! Extraction never fails; no matches means all-false claims or an
//! empty fact program.

use crate::claims::ClaimSet;
use crate::keywords;
use crate::types::{InterrogationPayload, Message};

/// Hint facts are capped; the rest of the case file is background.
const MAX_HINT_FACTS: usize = 20;
/// Suspect entity facts are capped the same way.
const MAX_SUSPECT_FACTS: usize = 10;
/// Only the most recent messages feed the fact program. Older context
/// is intentionally ignored.
const RECENT_MESSAGES: usize = 12;

/// Build the fallback claim set from the interviewed party's messages.
pub fn claims_from_transcript(messages: &[Message]) -> ClaimSet {
    let joined = messages
        .iter()
        .filter(|m| m.from_interviewed())
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    keywords::fallback_claims(&joined)
}

fn escape(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Compile the symbolic fact program for one payload.
///
/// Fact order: hints, suspect entities and attributes, explicit
/// claims, then per-message detections. Repeated detections emit
/// repeated facts; deduplication is the engine's concern.
pub fn backend_facts(payload: &InterrogationPayload) -> Vec<String> {
    let mut facts = Vec::new();

    for hint in payload.case_file.hints.iter().take(MAX_HINT_FACTS) {
        facts.push(format!("(hint \"{}\")", escape(hint)));
    }

    for suspect in payload.case_file.suspects.iter().take(MAX_SUSPECT_FACTS) {
        let sid = escape(suspect.ident());
        facts.push(format!("(suspect \"{}\")", sid));
        if let Some(gender) = suspect.gender() {
            facts.push(format!("(gender \"{}\" \"{}\")", sid, escape(gender)));
        }
        if let Some(occupation) = suspect.occupation() {
            facts.push(format!("(occupation \"{}\" \"{}\")", sid, escape(occupation)));
        }
    }

    let sid = escape(&payload.suspect_id);

    // Caller-supplied claims take effect directly.
    if let Some(claims) = &payload.claims {
        push_claim_facts(&mut facts, &sid, claims);
    }

    // Transcript scan over the most recent messages, all roles.
    let skip = payload.messages.len().saturating_sub(RECENT_MESSAGES);
    for message in &payload.messages[skip..] {
        let detected = keywords::backend_claims(&message.content);
        push_claim_facts(&mut facts, &sid, &detected);
    }

    facts
}

fn push_claim_facts(facts: &mut Vec<String>, sid: &str, claims: &ClaimSet) {
    if claims.mentions_weapon {
        facts.push(format!("(mentions-weapon \"{}\")", sid));
    }
    if claims.mentions_time {
        facts.push(format!("(mentions-time \"{}\")", sid));
    }
    if claims.mentions_location {
        facts.push(format!("(mentions-location \"{}\")", sid));
    }
    if claims.mentions_alibi {
        facts.push(format!("(mentions-alibi \"{}\")", sid));
    }
}
