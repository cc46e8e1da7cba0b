//! URL-fetch adapter: retrieves a page and reduces it to readable text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::types::ToolSpec;

use super::ToolKind;

/// Some sites reject requests without a browser-like identity.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Cap on the cleaned text, to keep tool results inside the model's context.
const MAX_CONTENT_CHARS: usize = 5000;

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script>").unwrap());
static STYLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<style\b.*?</style>").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub struct PageFetcher {
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct FetchArgs {
    url: String,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn spec() -> ToolSpec {
        ToolSpec {
            name: ToolKind::FetchUrl.name(),
            description: "Fetch and read content from a URL. Use this to read full article content.",
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "url": {"type": "string", "description": "The URL to fetch"}
                },
                "required": ["url"]
            }),
        }
    }

    /// Never fails: transport, status and argument problems all come back as
    /// error strings the model can read.
    pub async fn invoke(&self, arguments: &Value) -> String {
        let args: FetchArgs = match super::parse_args(arguments) {
            Ok(args) => args,
            Err(e) => return format!("Error fetching URL: {}", e),
        };

        match self.fetch(&args.url).await {
            Ok(text) => text,
            Err(e) => {
                warn!(url = %args.url, error = %e, "fetch failed");
                format!("Error fetching URL: {}", e)
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<String, String> {
        info!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| format!("failed to read body: {}", e))?;

        let text = strip_html(&body);
        info!(chars = text.chars().count(), "fetched page content");
        Ok(text)
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce raw HTML to plain text: drop script/style blocks, drop all
/// remaining tags, collapse whitespace, cap the length.
fn strip_html(html: &str) -> String {
    let without_scripts = SCRIPT_RE.replace_all(html, "");
    let without_styles = STYLE_RE.replace_all(&without_scripts, "");
    let without_tags = TAG_RE.replace_all(&without_styles, " ");
    let collapsed = WHITESPACE_RE.replace_all(&without_tags, " ");
    collapsed.trim().chars().take(MAX_CONTENT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_scripts_styles_and_tags() {
        let html = r#"<html><head>
            <style>body { color: red; }</style>
            <script>console.log("tracking");</script>
        </head><body>
            <h1>Title</h1>
            <p>First   paragraph.</p>
            <SCRIPT type="text/javascript">more();</SCRIPT>
        </body></html>"#;

        let text = strip_html(html);
        assert_eq!(text, "Title First paragraph.");
    }

    #[test]
    fn caps_output_at_5000_chars() {
        let html = format!("<p>{}</p>", "a".repeat(20_000));
        assert_eq!(strip_html(&html).chars().count(), MAX_CONTENT_CHARS);
    }

    #[tokio::test]
    async fn fetches_and_cleans_a_page() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/article")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body><p>Hello <b>world</b></p></body></html>")
            .create_async()
            .await;

        let tool = PageFetcher::new();
        let url = format!("{}/article", server.url());
        let result = tool.invoke(&json!({"url": url})).await;

        assert_eq!(result, "Hello world");
    }

    #[tokio::test]
    async fn non_success_status_becomes_error_string() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let tool = PageFetcher::new();
        let url = format!("{}/missing", server.url());
        let result = tool.invoke(&json!({"url": url})).await;

        assert!(result.starts_with("Error fetching URL: HTTP 404"), "{}", result);
    }

    #[tokio::test]
    async fn malformed_arguments_become_error_string() {
        let tool = PageFetcher::new();
        let result = tool.invoke(&json!({"link": "https://example.com"})).await;

        assert!(result.starts_with("Error fetching URL:"), "{}", result);
    }
}
