//! Case-file and transcript data model.
//!
//! Everything here is a plain value: built once per request from the
//! wire payload, read-only during reasoning, discarded with the result.
//! Field names on the wire match the original case-file service
//! (`caseFile`, `suspectId`, `assistantReply`).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::claims::ClaimSet;

/// Scalar attribute value for open-ended case-file fields.
///
/// Suspect records and timelines arrive as open mappings. A closed
/// scalar set keeps them typed without accepting arbitrary nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    Bool(bool),
    Num(f64),
}

impl AttrValue {
    /// String view of the value, `None` for non-string variants.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// A suspect record: an open mapping of descriptive attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suspect(pub BTreeMap<String, AttrValue>);

impl Suspect {
    /// String attribute by key; non-string values read as absent.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(AttrValue::as_str)
    }

    /// Identifier used in fact generation: `id`, else `name`, else a
    /// generic placeholder.
    pub fn ident(&self) -> &str {
        self.attr("id")
            .or_else(|| self.attr("name"))
            .unwrap_or("suspect")
    }

    pub fn gender(&self) -> Option<&str> {
        self.attr("gender").filter(|v| !v.is_empty())
    }

    pub fn occupation(&self) -> Option<&str> {
        self.attr("occupation").filter(|v| !v.is_empty())
    }
}

/// The case under investigation. Caller-owned, read-only to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub suspects: Vec<Suspect>,
    #[serde(default)]
    pub timeline: Option<BTreeMap<String, AttrValue>>,
}

/// One exchanged message. The `"user"` role identifies the
/// interviewed party; other roles are interviewer or system text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Whether this message was spoken by the interviewed party.
    pub fn from_interviewed(&self) -> bool {
        self.role == "user"
    }
}

/// A candidate investigative action. Pure value object; duplicates
/// are allowed and order is production order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub title: String,
    pub tags: Vec<String>,
    pub justification: String,
}

/// Terminal artifact of the pipeline: leads plus a consistency score
/// clamped to `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningResult {
    pub leads: Vec<Lead>,
    pub consistency: f64,
}

/// Aggregate input for one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterrogationPayload {
    #[serde(rename = "caseFile")]
    pub case_file: CaseFile,
    #[serde(rename = "suspectId")]
    pub suspect_id: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Informational only; no reasoner consumes it.
    #[serde(rename = "assistantReply", default)]
    pub assistant_reply: Option<String>,
    /// Pre-computed claims from the caller. Malformed claim objects
    /// deserialize to `None` rather than failing the whole payload.
    #[serde(default, deserialize_with = "lenient_claims")]
    pub claims: Option<ClaimSet>,
}

fn lenient_claims<'de, D>(deserializer: D) -> Result<Option<ClaimSet>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
