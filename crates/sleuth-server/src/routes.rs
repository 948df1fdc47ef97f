//! HTTP routes.
//!
//! One reasoning endpoint plus a health probe. The orchestrator never
//! errors, so `/interrogate` has no failure branch of its own; a
//! malformed body is rejected by the JSON extractor before it reaches
//! the pipeline.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use sleuth_core::{InterrogationPayload, ReasoningResult};
use sleuth_runtime::Orchestrator;

#[derive(Serialize)]
struct HealthResponse {
    service: &'static str,
    version: &'static str,
}

pub fn router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/interrogate", post(interrogate))
        .route("/health", get(health))
        .with_state(orchestrator)
        .layer(TraceLayer::new_for_http())
}

async fn interrogate(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(payload): Json<InterrogationPayload>,
) -> Json<ReasoningResult> {
    Json(orchestrator.analyze(&payload))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "sleuthd",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use sleuth_runtime::EngineRegistry;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let registry = Arc::new(EngineRegistry::with_defaults());
        router(Arc::new(Orchestrator::new(registry, "(rules)")))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_interrogate_round_trip() {
        let request_body = serde_json::json!({
            "caseFile": {"id": "case-1", "title": "The Gallery Incident"},
            "suspectId": "s1",
            "messages": [
                {"role": "user", "content": "We met for dinner at 8pm in the kitchen"}
            ]
        });

        let response = test_router()
            .oneshot(
                Request::post("/interrogate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["leads"].as_array().unwrap().len(), 2);
        assert!((json["consistency"].as_f64().unwrap() - 0.75).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["service"], "sleuthd");
    }
}
