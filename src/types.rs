// Transcript and tool-call types shared by the agent loop, the model adapter
// and the tool registry.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One tool invocation requested by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Provider-assigned call id; tool results correlate back through it.
    pub id: String,
    pub name: String,
    /// Decoded argument object. `Null` when the provider sent malformed JSON;
    /// the adapter then reports the bad arguments as its result string.
    pub arguments: Value,
}

/// Declared interface of a tool, sent to the model for binding.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON schema of the argument object.
    pub parameters: Value,
}

/// What the model answered with for one round-trip: plain text, a batch of
/// tool calls, or both.
#[derive(Debug, Clone)]
pub struct ModelReply {
    pub content: String,
    pub tool_calls: Vec<ToolCall>,
}

/// A single entry in the agent transcript.
#[derive(Debug, Clone)]
pub enum Turn {
    /// User-authored turn (instruction + topic).
    User { content: String },
    /// Model-authored turn, possibly requesting tool calls.
    Model {
        content: String,
        tool_calls: Vec<ToolCall>,
    },
    /// Result of one tool call, correlated by id.
    ToolResult { call_id: String, content: String },
}
