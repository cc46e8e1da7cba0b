use std::sync::Arc;

use crate::config::Config;
use crate::services::{HistoryService, ResearchService};

/// Shared application state. The service handles are built once at startup
/// and injected here; there is no ambient module-level client state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub research: Arc<ResearchService>,
    pub history: Arc<HistoryService>,
}

/// Persisted outcome of one research request. Immutable after creation
/// except for deletion; the store assigns the id.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRecord {
    pub id: String,
    pub user_id: String,
    pub topic: String,
    pub summary: String,
    /// Source URLs in order of first appearance in the summary, at most 10.
    pub sources: Vec<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

// API request/response types

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ResearchResponse {
    pub summary: String,
    pub sources: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, serde::Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub agent: bool,
}
