//! Research history: list and delete persisted results.

use std::sync::Arc;

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::ResearchRecord;
use crate::store::ResearchStore;

pub struct HistoryService {
    store: Arc<dyn ResearchStore>,
}

impl HistoryService {
    pub fn new(store: Arc<dyn ResearchStore>) -> Self {
        Self { store }
    }

    /// All records for one user, newest first.
    pub async fn list(&self, user_id: &str) -> AppResult<Vec<ResearchRecord>> {
        if user_id.trim().is_empty() {
            return Err(AppError::InvalidRequest("userId is required".to_string()));
        }
        self.store.list_for_user(user_id).await
    }

    // TODO: take the caller's userId and reject deletes of other users' records.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store.delete(id).await?;
        info!(id, "research record deleted");
        Ok(())
    }
}
