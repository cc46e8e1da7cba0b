//! Research orchestration: run the agent, extract sources, persist the result.

use std::sync::{Arc, LazyLock};

use chrono::Utc;
use regex::Regex;
use tracing::{error, info};

use crate::agent::ResearchAgent;
use crate::error::{AppError, AppResult};
use crate::models::ResearchResponse;
use crate::store::{NewResearchRecord, ResearchStore};

/// Cap on source URLs extracted from a summary.
const MAX_SOURCES: usize = 10;

const EMPTY_SUMMARY_REPLY: &str =
    "The research could not produce any results. Please try a different topic.";

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://[^\s)]+").unwrap());

pub struct ResearchService {
    agent: ResearchAgent,
    store: Arc<dyn ResearchStore>,
}

impl ResearchService {
    pub fn new(agent: ResearchAgent, store: Arc<dyn ResearchStore>) -> Self {
        Self { agent, store }
    }

    /// Run one research request end to end.
    ///
    /// Persistence is best-effort: a store failure is logged but never costs
    /// the caller a summary that was already produced.
    pub async fn research(&self, user_id: &str, topic: &str) -> AppResult<ResearchResponse> {
        if user_id.trim().is_empty() || topic.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "userId and topic are required".to_string(),
            ));
        }

        info!(user_id, topic, "starting research");
        let summary = self.agent.run(topic).await?;
        if summary.trim().is_empty() {
            // Nothing worth keeping in history.
            info!(user_id, topic, "agent produced no summary");
            return Ok(ResearchResponse {
                summary: EMPTY_SUMMARY_REPLY.to_string(),
                sources: Vec::new(),
            });
        }

        let sources = extract_urls(&summary);
        info!(sources = sources.len(), "research finished");

        let record = NewResearchRecord {
            user_id: user_id.to_string(),
            topic: topic.to_string(),
            summary: summary.clone(),
            sources: sources.clone(),
            timestamp: Utc::now(),
        };
        if let Err(e) = self.store.create(record).await {
            error!(error = %e, "failed to persist research result");
        }

        Ok(ResearchResponse { summary, sources })
    }
}

/// URLs in order of first appearance, capped at [`MAX_SOURCES`].
fn extract_urls(text: &str) -> Vec<String> {
    URL_RE
        .find_iter(text)
        .take(MAX_SOURCES)
        .map(|m| m.as_str().to_string())
        .collect()
}
