//! Appwrite-backed research store, talking to its REST document API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::config::AppwriteConfig;
use crate::error::{AppError, AppResult};
use crate::models::ResearchRecord;

use super::{NewResearchRecord, ResearchStore};

pub struct AppwriteStore {
    client: reqwest::Client,
    config: AppwriteConfig,
}

/// A document as the Appwrite API returns it: system fields prefixed with `$`,
/// collection attributes at the top level.
#[derive(Deserialize)]
struct Document {
    #[serde(rename = "$id")]
    id: String,
    #[serde(rename = "userId")]
    user_id: String,
    topic: String,
    summary: String,
    sources: Vec<String>,
    timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
struct DocumentList {
    documents: Vec<Document>,
}

#[derive(Serialize)]
struct CreateDocument<'a> {
    #[serde(rename = "documentId")]
    document_id: &'a str,
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl From<Document> for ResearchRecord {
    fn from(doc: Document) -> Self {
        ResearchRecord {
            id: doc.id,
            user_id: doc.user_id,
            topic: doc.topic,
            summary: doc.summary,
            sources: doc.sources,
            timestamp: doc.timestamp,
        }
    }
}

impl AppwriteStore {
    pub fn new(config: AppwriteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint.trim_end_matches('/'),
            self.config.database_id,
            self.config.collection_id
        )
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("X-Appwrite-Project", &self.config.project_id)
            .header("X-Appwrite-Key", &self.config.api_key)
    }

    /// Pass a successful response through; turn anything else into a store
    /// error carrying Appwrite's own message when it sends one.
    async fn check(response: reqwest::Response) -> AppResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ApiError>().await {
            Ok(body) => body.message,
            Err(_) => status.to_string(),
        };
        Err(AppError::Store(format!("Appwrite error: {}", message)))
    }
}

#[async_trait]
impl ResearchStore for AppwriteStore {
    async fn create(&self, record: NewResearchRecord) -> AppResult<ResearchRecord> {
        debug!(user_id = %record.user_id, topic = %record.topic, "creating research document");

        let body = CreateDocument {
            // Appwrite generates the id server-side.
            document_id: "unique()",
            data: json!({
                "userId": record.user_id,
                "topic": record.topic,
                "summary": record.summary,
                "sources": record.sources,
                "timestamp": record.timestamp,
            }),
        };

        let response = self
            .request(self.client.post(self.documents_url()))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Store(format!("Appwrite request failed: {}", e)))?;

        let document: Document = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::Store(format!("invalid Appwrite response: {}", e)))?;

        Ok(document.into())
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<ResearchRecord>> {
        let equal = json!({
            "method": "equal",
            "attribute": "userId",
            "values": [user_id],
        })
        .to_string();
        let order = json!({
            "method": "orderDesc",
            "attribute": "timestamp",
        })
        .to_string();

        let response = self
            .request(self.client.get(self.documents_url()))
            .query(&[("queries[]", equal.as_str()), ("queries[]", order.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Store(format!("Appwrite request failed: {}", e)))?;

        let list: DocumentList = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::Store(format!("invalid Appwrite response: {}", e)))?;

        Ok(list.documents.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let url = format!("{}/{}", self.documents_url(), id);
        let response = self
            .request(self.client.delete(url))
            .send()
            .await
            .map_err(|e| AppError::Store(format!("Appwrite request failed: {}", e)))?;

        Self::check(response).await?;
        Ok(())
    }
}
