//! Bounded tool-calling agent loop.
//!
//! One run alternates hosted-model inference with tool execution: the model
//! sees the full transcript each round-trip, may request tool calls, and the
//! loop feeds the results back until the model answers in plain text or the
//! iteration cap is hit.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::llm::ChatModel;
use crate::tools::ToolRegistry;
use crate::types::Turn;

/// Round-trip cap per research request.
pub const MAX_ITERATIONS: usize = 10;

const MAX_ITERATIONS_REPLY: &str = "Max iterations reached. Research incomplete.";

const SYSTEM_PROMPT: &str = r#"You are a research assistant.

Your job: research topics for the user.

TOOLS:
- tavily_search_results_json: find relevant articles and sources on a topic
- fetch_url: read full article content from a URL
- write_file: save notes locally

Workflow:
1. The user asks about a topic
2. Use tavily_search_results_json to find the top 3-5 sources
3. Use fetch_url to read the most important articles (max 2-3 articles)
4. Produce a structured summary (3-5 bullet points)
5. List all sources

Format:
## [Topic]

### Summary:
- Point 1
- Point 2
- Point 3

### Sources:
1. [URL 1]
2. [URL 2]
3. [URL 3]

Be precise, factual, and cite your sources."#;

pub struct ResearchAgent {
    model: Arc<dyn ChatModel>,
    tools: ToolRegistry,
    max_iterations: usize,
}

impl ResearchAgent {
    pub fn new(model: Arc<dyn ChatModel>, tools: ToolRegistry) -> Self {
        Self {
            model,
            tools,
            max_iterations: MAX_ITERATIONS,
        }
    }

    /// Run the full loop for one topic and return the model's final text.
    pub async fn run(&self, topic: &str) -> AppResult<String> {
        let (reply, _) = self.run_with_transcript(topic).await?;
        Ok(reply)
    }

    /// Loop body; also returns the finished transcript so callers can inspect
    /// how the conversation unfolded.
    ///
    /// Tool calls within a batch execute sequentially, in the order the model
    /// listed them. A failed tool never aborts the run (adapters self-report
    /// errors as content); an unknown tool name is skipped without appending
    /// a result turn.
    pub async fn run_with_transcript(&self, topic: &str) -> AppResult<(String, Vec<Turn>)> {
        let specs = self.tools.specs();
        let mut transcript = vec![Turn::User {
            content: format!("{}\n\n{}", SYSTEM_PROMPT, topic),
        }];

        for iteration in 1..=self.max_iterations {
            debug!(iteration, max = self.max_iterations, "agent iteration");

            let reply = self.model.complete(&transcript, &specs).await?;
            transcript.push(Turn::Model {
                content: reply.content.clone(),
                tool_calls: reply.tool_calls.clone(),
            });

            if reply.tool_calls.is_empty() {
                // The sole success exit.
                info!(iteration, "agent finished - no more tool calls");
                return Ok((reply.content, transcript));
            }

            info!(count = reply.tool_calls.len(), "executing tool calls");
            for call in &reply.tool_calls {
                match self.tools.dispatch(call).await {
                    Some(result) => transcript.push(Turn::ToolResult {
                        call_id: call.id.clone(),
                        content: result,
                    }),
                    None => warn!(tool = %call.name, "tool not found, skipping call"),
                }
            }
        }

        info!("max iterations reached without a final answer");
        Ok((MAX_ITERATIONS_REPLY.to_string(), transcript))
    }
}
