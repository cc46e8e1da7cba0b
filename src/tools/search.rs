//! Tavily web-search adapter.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::types::ToolSpec;

use super::ToolKind;

const TAVILY_API_BASE: &str = "https://api.tavily.com";

/// Fixed cap on search hits; the workflow only reads the top few anyway.
const MAX_RESULTS: usize = 5;

pub struct TavilySearch {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchArgs {
    query: String,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
    include_answer: bool,
    include_raw_content: bool,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Serialize, Deserialize)]
struct SearchHit {
    title: String,
    url: String,
    content: String,
    #[serde(default)]
    score: f64,
}

impl TavilySearch {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: TAVILY_API_BASE.to_string(),
        }
    }

    /// Point the adapter at a different endpoint (tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn spec() -> ToolSpec {
        ToolSpec {
            name: ToolKind::Search.name(),
            description: "Search the web using Tavily API. Returns a list of relevant web pages \
                          with URLs and content snippets.",
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "The search query"}
                },
                "required": ["query"]
            }),
        }
    }

    /// Never fails: transport, status and argument problems all come back as
    /// error strings the model can read.
    pub async fn invoke(&self, arguments: &Value) -> String {
        let args: SearchArgs = match super::parse_args(arguments) {
            Ok(args) => args,
            Err(e) => return format!("Error searching with Tavily: {}", e),
        };

        match self.search(&args.query).await {
            Ok(body) => body,
            Err(e) => {
                warn!(query = %args.query, error = %e, "Tavily search failed");
                format!("Error searching with Tavily: {}", e)
            }
        }
    }

    async fn search(&self, query: &str) -> Result<String, String> {
        info!(query, "searching Tavily");

        let request = SearchRequest {
            api_key: &self.api_key,
            query,
            max_results: MAX_RESULTS,
            include_answer: true,
            include_raw_content: false,
        };

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Tavily API error: {}", status));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| format!("failed to parse response: {}", e))?;

        info!(results = parsed.results.len(), "Tavily search finished");

        serde_json::to_string(&serde_json::json!({
            "answer": parsed.answer,
            "results": parsed.results,
        }))
        .map_err(|e| format!("failed to encode results: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn returns_json_encoded_results() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "answer": "Rust is a systems language.",
                    "results": [{
                        "title": "The Rust Book",
                        "url": "https://doc.rust-lang.org/book/",
                        "content": "Welcome to Rust",
                        "score": 0.97
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let tool = TavilySearch::new("test-key").with_base_url(&server.url());
        let result = tool.invoke(&json!({"query": "rust language"})).await;

        let decoded: Value = serde_json::from_str(&result).unwrap();
        assert_eq!(decoded["answer"], "Rust is a systems language.");
        assert_eq!(decoded["results"][0]["url"], "https://doc.rust-lang.org/book/");
        assert_eq!(decoded["results"][0]["score"], 0.97);
    }

    #[tokio::test]
    async fn non_success_status_becomes_error_string() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/search")
            .with_status(429)
            .create_async()
            .await;

        let tool = TavilySearch::new("test-key").with_base_url(&server.url());
        let result = tool.invoke(&json!({"query": "anything"})).await;

        assert!(result.starts_with("Error searching with Tavily:"), "{}", result);
    }

    #[tokio::test]
    async fn malformed_arguments_become_error_string() {
        let tool = TavilySearch::new("test-key");
        let result = tool.invoke(&json!({"q": "missing field"})).await;

        assert!(result.starts_with("Error searching with Tavily:"), "{}", result);
    }
}
