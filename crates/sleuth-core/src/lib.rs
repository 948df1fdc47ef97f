//! # sleuth-core
//!
//! Deterministic reasoning core for interrogation analysis.
//!
//! Given a case file, a target suspect, and the message transcript so
//! far, this crate derives canonical claims and turns them into
//! investigative leads plus a consistency score.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same payload always produces the same result
//! 2. **Total**: extraction and reasoning never fail; no matches means
//!    all-false claims and a baseline score
//! 3. **Stateless**: every entity is built per request and discarded
//!    with the result
//! 4. **Dependency-free**: no engine, no I/O; this is the path the
//!    runtime falls back on
//!
//! ## Example
//!
//! ```rust,ignore
//! use sleuth_core::{fallback_analysis, InterrogationPayload};
//!
//! let payload: InterrogationPayload = serde_json::from_str(body)?;
//! let result = fallback_analysis(&payload);
//! println!("{} leads, consistency {:.2}", result.leads.len(), result.consistency);
//! ```

pub mod claims;
pub mod extract;
pub mod heuristic;
pub mod keywords;
pub mod types;

// Re-export main types at crate root
pub use claims::ClaimSet;
pub use extract::{backend_facts, claims_from_transcript};
pub use heuristic::{clamp_score, fallback_analysis, reason, BASE_SCORE};
pub use types::{
    AttrValue, CaseFile, InterrogationPayload, Lead, Message, ReasoningResult, Suspect,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_with(messages: Vec<Message>) -> InterrogationPayload {
        InterrogationPayload {
            case_file: CaseFile {
                id: "case-1".to_string(),
                title: "The Gallery Incident".to_string(),
                excerpt: None,
                story: None,
                hints: vec![],
                suspects: vec![],
                timeline: None,
            },
            suspect_id: "s1".to_string(),
            messages,
            assistant_reply: None,
            claims: None,
        }
    }

    #[test]
    fn test_dinner_transcript_scores_075() {
        let payload = payload_with(vec![Message::new(
            "user",
            "We met for dinner at 8pm in the kitchen",
        )]);

        let result = fallback_analysis(&payload);

        let titles: Vec<&str> = result.leads.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Check corridor camera near time of death",
                "Validate suspect alibi with independent witness",
            ]
        );
        assert!((result.consistency - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_empty_transcript_is_baseline() {
        let result = fallback_analysis(&payload_with(vec![]));
        assert!(result.leads.is_empty());
        assert!((result.consistency - BASE_SCORE).abs() < 1e-9);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let payload = payload_with(vec![
            Message::new("assistant", "Where were you?"),
            Message::new("user", "At a restaurant, there is a witness"),
        ]);
        assert_eq!(fallback_analysis(&payload), fallback_analysis(&payload));
    }

    #[test]
    fn test_result_serializes_with_wire_names() {
        let result = fallback_analysis(&payload_with(vec![Message::new("user", "the knife")]));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["leads"][0]["title"].is_string());
        assert!(json["consistency"].is_number());
    }
}
