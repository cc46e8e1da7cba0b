//! Note-writing adapter: saves research notes to the local filesystem.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::types::ToolSpec;

use super::ToolKind;

pub struct NoteWriter;

#[derive(Deserialize)]
struct WriteArgs {
    path: String,
    content: String,
}

impl NoteWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn spec() -> ToolSpec {
        ToolSpec {
            name: ToolKind::WriteFile.name(),
            description: "Write content to a local file. Use this to save research notes locally.",
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "path": {"type": "string", "description": "File path"},
                    "content": {"type": "string", "description": "Content to write"}
                },
                "required": ["path", "content"]
            }),
        }
    }

    /// Never fails: filesystem and argument problems come back as error
    /// strings the model can read.
    pub async fn invoke(&self, arguments: &Value) -> String {
        let args: WriteArgs = match super::parse_args(arguments) {
            Ok(args) => args,
            Err(e) => return format!("Error writing file: {}", e),
        };

        match Self::write(&args.path, &args.content).await {
            Ok(()) => {
                info!(path = %args.path, "note written");
                format!("File written successfully: {}", args.path)
            }
            Err(e) => {
                warn!(path = %args.path, error = %e, "write file failed");
                format!("Error writing file: {}", e)
            }
        }
    }

    async fn write(path: &str, content: &str) -> Result<(), String> {
        let path = Path::new(path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| format!("failed to create directory: {}", e))?;
            }
        }

        tokio::fs::write(path, content)
            .await
            .map_err(|e| format!("failed to write file: {}", e))
    }
}

impl Default for NoteWriter {
    fn default() -> Self {
        Self::new()
    }
}
