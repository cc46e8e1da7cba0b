use async_trait::async_trait;

use crate::error::AppResult;
use crate::types::{ModelReply, ToolSpec, Turn};

/// Boundary to the hosted chat model.
///
/// One round-trip: the full transcript goes out, one reply (text and/or a
/// batch of requested tool calls) comes back. Production uses the OpenAI
/// wire format; tests substitute a scripted implementation.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, transcript: &[Turn], tools: &[ToolSpec]) -> AppResult<ModelReply>;
}
