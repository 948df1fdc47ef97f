//! Canonical claim vocabulary.
//!
//! Four boolean observations about the suspect's statements. Every key
//! is always present with an explicit value; reasoners never see a
//! partial claim set. Keys are extended, never renamed, so downstream
//! heuristics stay backward compatible.

use serde::{Deserialize, Serialize};

/// The canonical claims derivable from a transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    #[serde(default)]
    pub mentions_time: bool,
    #[serde(default)]
    pub mentions_location: bool,
    #[serde(default)]
    pub mentions_weapon: bool,
    #[serde(default)]
    pub mentions_alibi: bool,
}

impl ClaimSet {
    pub fn new(time: bool, location: bool, weapon: bool, alibi: bool) -> Self {
        Self {
            mentions_time: time,
            mentions_location: location,
            mentions_weapon: weapon,
            mentions_alibi: alibi,
        }
    }

    /// True when at least one claim holds.
    pub fn any(&self) -> bool {
        self.mentions_time || self.mentions_location || self.mentions_weapon || self.mentions_alibi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_false() {
        let claims = ClaimSet::default();
        assert!(!claims.any());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let claims: ClaimSet = serde_json::from_str(
            r#"{"mentions_time": true, "mentions_motive": true}"#,
        )
        .unwrap();
        assert!(claims.mentions_time);
        assert!(claims.any());
    }
}
