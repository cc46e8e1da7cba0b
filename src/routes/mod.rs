//! HTTP surface:
//! - `GET /api/health` - liveness probe
//! - `POST /api/research` - run the research agent for a topic
//! - `GET /api/history?userId=` - a user's past research, newest first
//! - `DELETE /api/history/{id}` - remove one research record

pub mod health;
pub mod history;
pub mod research;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_layer;
use crate::models::AppState;

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(state.config.server.allowed_origins.clone());

    Router::new()
        .merge(health::router())
        .merge(research::router())
        .merge(history::router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ResearchAgent;
    use crate::config::Config;
    use crate::llm::testing::ScriptedModel;
    use crate::services::{HistoryService, ResearchService};
    use crate::store::{MemoryStore, ResearchStore};
    use crate::tools::{NoteWriter, PageFetcher, TavilySearch, ToolRegistry};
    use crate::types::ModelReply;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_config() -> Config {
        let env = HashMap::from([
            ("OPENAI_API_KEY", "sk-test"),
            ("TAVILY_API_KEY", "tvly-test"),
            ("APPWRITE_ENDPOINT", "https://cloud.appwrite.io/v1"),
            ("APPWRITE_PROJECT_ID", "proj"),
            ("APPWRITE_DATABASE_ID", "db"),
            ("APPWRITE_COLLECTION_ID", "coll"),
            ("APPWRITE_API_KEY", "key"),
        ]);
        Config::from_lookup(|name| env.get(name).map(|v| v.to_string())).unwrap()
    }

    fn app(model: ScriptedModel) -> Router {
        let store: Arc<dyn ResearchStore> = Arc::new(MemoryStore::new());
        let tools = ToolRegistry::new(
            TavilySearch::new("test-key"),
            PageFetcher::new(),
            NoteWriter::new(),
        );
        let agent = ResearchAgent::new(Arc::new(model), tools);
        let state = AppState {
            config: test_config(),
            research: Arc::new(ResearchService::new(agent, store.clone())),
            history: Arc::new(HistoryService::new(store)),
        };
        router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = app(ScriptedModel::new(vec![]));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"status": "ok", "agent": true})
        );
    }

    #[tokio::test]
    async fn research_returns_summary_and_sources() {
        let model = ScriptedModel::new(vec![ModelReply {
            content: "## Rust\n\n### Sources:\n1. https://doc.rust-lang.org/book/".to_string(),
            tool_calls: Vec::new(),
        }]);
        let response = app(model)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/research")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({"userId": "alice", "topic": "rust"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["sources"], json!(["https://doc.rust-lang.org/book/"]));
    }

    #[tokio::test]
    async fn research_without_user_id_is_a_400() {
        let response = app(ScriptedModel::new(vec![]))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/research")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({"topic": "rust"}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "userId and topic are required"})
        );
    }

    #[tokio::test]
    async fn history_without_user_id_is_a_400() {
        let response = app(ScriptedModel::new(vec![]))
            .oneshot(
                Request::builder()
                    .uri("/api/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "userId is required"}));
    }

    #[tokio::test]
    async fn deleting_an_unknown_record_is_a_500() {
        let response = app(ScriptedModel::new(vec![]))
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/history/ghost")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
