//! Tool Adapters
//!
//! Boundary components the agent loop can dispatch to:
//! - `tavily_search_results_json` - web search via the Tavily API
//! - `fetch_url` - retrieve a page and reduce it to readable text
//! - `write_file` - save research notes to the local filesystem
//!
//! Adapters never fail: every transport, status or argument problem is folded
//! into a descriptive error string returned as the tool result, so the model
//! can see the failure and react to it.

pub mod fetch;
pub mod notes;
pub mod search;

pub use fetch::PageFetcher;
pub use notes::NoteWriter;
pub use search::TavilySearch;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{ToolCall, ToolSpec};

/// The closed set of tools the agent can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Search,
    FetchUrl,
    WriteFile,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [ToolKind::Search, ToolKind::FetchUrl, ToolKind::WriteFile];

    /// Wire name the model addresses the tool by.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Search => "tavily_search_results_json",
            ToolKind::FetchUrl => "fetch_url",
            ToolKind::WriteFile => "write_file",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Lookup table over the three adapters, built once at startup.
pub struct ToolRegistry {
    search: TavilySearch,
    fetcher: PageFetcher,
    notes: NoteWriter,
}

impl ToolRegistry {
    pub fn new(search: TavilySearch, fetcher: PageFetcher, notes: NoteWriter) -> Self {
        Self {
            search,
            fetcher,
            notes,
        }
    }

    /// Declared interfaces of every tool, for binding to the model.
    pub fn specs(&self) -> Vec<ToolSpec> {
        vec![TavilySearch::spec(), PageFetcher::spec(), NoteWriter::spec()]
    }

    /// Invoke the tool a call names.
    ///
    /// Returns `None` for names outside the closed set; known tools always
    /// produce a result string.
    pub async fn dispatch(&self, call: &ToolCall) -> Option<String> {
        let kind = ToolKind::from_name(&call.name)?;
        let result = match kind {
            ToolKind::Search => self.search.invoke(&call.arguments).await,
            ToolKind::FetchUrl => self.fetcher.invoke(&call.arguments).await,
            ToolKind::WriteFile => self.notes.invoke(&call.arguments).await,
        };
        Some(result)
    }
}

/// Decode a tool-call argument object into its typed payload.
pub(crate) fn parse_args<T: DeserializeOwned>(arguments: &Value) -> Result<T, String> {
    serde_json::from_value(arguments.clone()).map_err(|e| format!("invalid tool arguments: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_names_round_trip() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn unknown_tool_name_is_not_resolved() {
        assert_eq!(ToolKind::from_name("translate_text"), None);
    }

    #[tokio::test]
    async fn dispatch_returns_none_for_unknown_tool() {
        let registry = ToolRegistry::new(
            TavilySearch::new("test-key"),
            PageFetcher::new(),
            NoteWriter::new(),
        );
        let call = ToolCall {
            id: "call_1".to_string(),
            name: "translate_text".to_string(),
            arguments: json!({}),
        };
        assert!(registry.dispatch(&call).await.is_none());
    }

    #[test]
    fn specs_cover_every_tool_kind() {
        let registry = ToolRegistry::new(
            TavilySearch::new("test-key"),
            PageFetcher::new(),
            NoteWriter::new(),
        );
        let names: Vec<&str> = registry.specs().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["tavily_search_results_json", "fetch_url", "write_file"]
        );
    }
}
