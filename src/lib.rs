//! Backend for an AI research assistant.
//!
//! A bounded tool-calling agent drives OpenAI chat completions over three
//! tools (Tavily web search, URL fetch, local note writing), and the results
//! are persisted to Appwrite and served over a small axum API.

pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod tools;
pub mod types;

pub use config::Config;
pub use models::AppState;

/// Build the full application router from shared state.
pub fn create_router(state: AppState) -> axum::Router {
    routes::router(state)
}
