// OpenAI chat-completions adapter with tool binding.
// API reference: https://platform.openai.com/docs/api-reference/chat

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::llm::provider::ChatModel;
use crate::types::{ModelReply, ToolCall, ToolSpec, Turn};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

// The research workflow wants deterministic, factual output.
const TEMPERATURE: f32 = 0.0;

pub struct OpenAiChatModel {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

// Request types (chat-completions wire format)

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool<'a>>,
}

#[derive(Serialize)]
struct WireTool<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    function: &'a ToolSpec,
}

#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<WireToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    function: WireFunctionCall,
}

#[derive(Serialize, Deserialize)]
struct WireFunctionCall {
    name: String,
    /// JSON-encoded argument object, as the provider transmits it.
    arguments: String,
}

// Response types

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<WireToolCall>>,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl OpenAiChatModel {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: OPENAI_API_BASE.to_string(),
        }
    }

    /// Point the adapter at a different endpoint (compatible proxies, tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn wire_messages(transcript: &[Turn]) -> Vec<WireMessage> {
        transcript
            .iter()
            .map(|turn| match turn {
                Turn::User { content } => WireMessage {
                    role: "user",
                    content: Some(content.clone()),
                    tool_calls: None,
                    tool_call_id: None,
                },
                Turn::Model {
                    content,
                    tool_calls,
                } => WireMessage {
                    role: "assistant",
                    content: if content.is_empty() {
                        None
                    } else {
                        Some(content.clone())
                    },
                    tool_calls: if tool_calls.is_empty() {
                        None
                    } else {
                        Some(tool_calls.iter().map(WireToolCall::from_call).collect())
                    },
                    tool_call_id: None,
                },
                Turn::ToolResult { call_id, content } => WireMessage {
                    role: "tool",
                    content: Some(content.clone()),
                    tool_calls: None,
                    tool_call_id: Some(call_id.clone()),
                },
            })
            .collect()
    }
}

impl WireToolCall {
    fn from_call(call: &ToolCall) -> Self {
        Self {
            id: call.id.clone(),
            kind: "function".to_string(),
            function: WireFunctionCall {
                name: call.name.clone(),
                arguments: call.arguments.to_string(),
            },
        }
    }

    fn into_call(self) -> ToolCall {
        // Malformed argument JSON becomes Null; the tool adapter reports it.
        let arguments = serde_json::from_str(&self.function.arguments).unwrap_or(Value::Null);
        ToolCall {
            id: self.id,
            name: self.function.name,
            arguments,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, transcript: &[Turn], tools: &[ToolSpec]) -> AppResult<ModelReply> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: &self.model,
            messages: Self::wire_messages(transcript),
            temperature: TEMPERATURE,
            tools: tools
                .iter()
                .map(|spec| WireTool {
                    kind: "function",
                    function: spec,
                })
                .collect(),
        };
        debug!(model = %self.model, turns = transcript.len(), "calling chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("OpenAI request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                return Err(AppError::Provider(format!(
                    "OpenAI API error ({}): {}",
                    status, parsed.error.message
                )));
            }

            return Err(AppError::Provider(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("failed to parse OpenAI response: {}", e)))?;

        let choice = chat
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Provider("OpenAI returned no choices".to_string()))?;

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(WireToolCall::into_call)
            .collect();

        Ok(ModelReply {
            content: choice.message.content.unwrap_or_default(),
            tool_calls,
        })
    }
}
