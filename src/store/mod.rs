//! Research persistence.
//!
//! The `ResearchStore` trait is the seam between the services and the backing
//! store: Appwrite in production, an in-memory store in tests.

pub mod appwrite;
pub mod memory;

pub use appwrite::AppwriteStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AppResult;
use crate::models::ResearchRecord;

/// A finished research result, before the store assigns it an id.
#[derive(Debug, Clone)]
pub struct NewResearchRecord {
    pub user_id: String,
    pub topic: String,
    pub summary: String,
    pub sources: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

#[async_trait]
pub trait ResearchStore: Send + Sync {
    /// Persist a record and return it with its assigned id.
    async fn create(&self, record: NewResearchRecord) -> AppResult<ResearchRecord>;

    /// All records for one user, newest first.
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<ResearchRecord>>;

    /// Delete one record by id.
    async fn delete(&self, id: &str) -> AppResult<()>;
}
