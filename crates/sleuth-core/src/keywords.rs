//! Keyword vocabularies for claim detection.
//!
//! Two separate vocabularies live here on purpose. The backend-fact
//! path and the heuristic fallback path grew independently and their
//! keyword lists disagree on edge cases (`gun`, `hour`, `tonight`,
//! `yesterday`). That disagreement is observable behavior; the lists
//! are kept as two tables rather than merged.
//!
//! All detection is case-insensitive substring search. No stemming, no
//! tokenization.

use crate::claims::ClaimSet;

// Backend-fact path (feeds the symbolic rule engine).
const BACKEND_WEAPON: &[&str] = &["opener", "knife", "weapon"];
const BACKEND_TIME: &[&str] = &["pm", "am", ":", "time", "tonight", "yesterday"];
const BACKEND_LOCATION: &[&str] = &["corridor", "room", "restaurant", "kitchen", "hall"];
const BACKEND_ALIBI: &[&str] = &["alibi", "witness", "home", "dinner", "meeting"];

// Heuristic fallback path (feeds the deterministic reasoner).
const FALLBACK_TIME: &[&str] = &["am", "pm", ":", "hour", "time"];
const FALLBACK_LOCATION: &[&str] = &["room", "hall", "kitchen", "restaurant", "corridor"];
const FALLBACK_WEAPON: &[&str] = &["knife", "opener", "gun", "weapon", "letter opener"];
const FALLBACK_ALIBI: &[&str] = &["alibi", "home", "dinner", "meeting", "witness"];

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

/// Claims detected in one message body, backend vocabulary.
pub fn backend_claims(content: &str) -> ClaimSet {
    let lower = content.to_lowercase();
    ClaimSet::new(
        contains_any(&lower, BACKEND_TIME),
        contains_any(&lower, BACKEND_LOCATION),
        contains_any(&lower, BACKEND_WEAPON),
        contains_any(&lower, BACKEND_ALIBI),
    )
}

/// Claims detected in joined transcript text, fallback vocabulary.
pub fn fallback_claims(text: &str) -> ClaimSet {
    let lower = text.to_lowercase();
    ClaimSet::new(
        contains_any(&lower, FALLBACK_TIME),
        contains_any(&lower, FALLBACK_LOCATION),
        contains_any(&lower, FALLBACK_WEAPON),
        contains_any(&lower, FALLBACK_ALIBI),
    )
}
