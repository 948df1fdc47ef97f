//! Asynchronous agent surface.
//!
//! Mirrors the HTTP endpoint over an in-process message channel, for
//! callers speaking the agent protocol rather than HTTP. The contract
//! here is stricter than "never raise": the loop answers every request
//! it receives. A request that cannot even be converted into a payload
//! gets an empty result with a 0.0 score instead of silence.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use sleuth_core::{CaseFile, InterrogationPayload, Lead, Message};
use sleuth_runtime::Orchestrator;

const CHANNEL_CAPACITY: usize = 32;

/// One transcript entry as carried by the agent protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentMessage {
    pub role: String,
    pub content: String,
}

/// Analysis request. The case file travels as an open JSON mapping;
/// conversion happens inside the loop so a malformed one cannot kill
/// the reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRequest {
    pub case_file: Value,
    pub suspect_id: String,
    #[serde(default)]
    pub messages: Vec<AgentMessage>,
    #[serde(default)]
    pub assistant_reply: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    pub leads: Vec<Lead>,
    pub consistency: f64,
}

impl AgentResponse {
    /// The reply of last resort.
    fn empty() -> Self {
        Self {
            leads: vec![],
            consistency: 0.0,
        }
    }
}

type Envelope = (AgentRequest, oneshot::Sender<AgentResponse>);

/// Handle for submitting requests to the agent loop.
#[derive(Clone)]
pub struct AgentHandle {
    tx: mpsc::Sender<Envelope>,
}

impl AgentHandle {
    /// Submit a request and wait for the reply. A torn-down loop
    /// yields the empty reply rather than an error.
    pub async fn interrogate(&self, request: AgentRequest) -> AgentResponse {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.tx.send((request, reply_tx)).await.is_err() {
            return AgentResponse::empty();
        }
        reply_rx.await.unwrap_or_else(|_| AgentResponse::empty())
    }
}

/// Spawn the agent loop. The loop lives as long as the returned
/// handle (or any clone) does.
pub fn spawn(orchestrator: Arc<Orchestrator>) -> AgentHandle {
    let (tx, mut rx) = mpsc::channel::<Envelope>(CHANNEL_CAPACITY);
    tokio::spawn(async move {
        while let Some((request, reply)) = rx.recv().await {
            let response = handle_request(&orchestrator, request);
            // Receiver gone means the caller stopped waiting; nothing
            // left to answer.
            let _ = reply.send(response);
        }
    });
    AgentHandle { tx }
}

fn handle_request(orchestrator: &Orchestrator, request: AgentRequest) -> AgentResponse {
    match to_payload(request) {
        Ok(payload) => {
            let result = orchestrator.analyze(&payload);
            AgentResponse {
                leads: result.leads,
                consistency: result.consistency,
            }
        }
        Err(error) => {
            tracing::warn!(%error, "malformed agent request, replying with empty result");
            AgentResponse::empty()
        }
    }
}

fn to_payload(request: AgentRequest) -> Result<InterrogationPayload, serde_json::Error> {
    let case_file: CaseFile = serde_json::from_value(request.case_file)?;
    Ok(InterrogationPayload {
        case_file,
        suspect_id: request.suspect_id,
        messages: request
            .messages
            .into_iter()
            .map(|m| Message::new(m.role, m.content))
            .collect(),
        assistant_reply: request.assistant_reply,
        claims: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sleuth_runtime::EngineRegistry;

    fn handle() -> AgentHandle {
        let registry = Arc::new(EngineRegistry::with_defaults());
        spawn(Arc::new(Orchestrator::new(registry, "(rules)")))
    }

    fn request(case_file: Value) -> AgentRequest {
        AgentRequest {
            case_file,
            suspect_id: "s1".to_string(),
            messages: vec![AgentMessage {
                role: "user".to_string(),
                content: "We met for dinner at 8pm in the kitchen".to_string(),
            }],
            assistant_reply: None,
        }
    }

    #[tokio::test]
    async fn test_valid_request_gets_heuristic_result() {
        let response = handle()
            .interrogate(request(serde_json::json!({
                "id": "case-1",
                "title": "The Gallery Incident"
            })))
            .await;

        assert_eq!(response.leads.len(), 2);
        assert!((response.consistency - 0.75).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_malformed_case_file_still_gets_a_reply() {
        let response = handle()
            .interrogate(request(serde_json::json!("not a case file")))
            .await;

        assert!(response.leads.is_empty());
        assert_eq!(response.consistency, 0.0);
    }

    #[tokio::test]
    async fn test_loop_survives_bad_requests() {
        let handle = handle();

        let bad = handle
            .interrogate(request(serde_json::json!(42)))
            .await;
        assert_eq!(bad.consistency, 0.0);

        // The same loop still serves the next caller.
        let good = handle
            .interrogate(request(serde_json::json!({"id": "c", "title": "t"})))
            .await;
        assert!((good.consistency - 0.75).abs() < 1e-9);
    }
}
