//! In-memory research store, used by tests and local development.

use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::ResearchRecord;

use super::{NewResearchRecord, ResearchStore};

#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ResearchRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResearchStore for MemoryStore {
    async fn create(&self, record: NewResearchRecord) -> AppResult<ResearchRecord> {
        let stored = ResearchRecord {
            id: Uuid::new_v4().to_string(),
            user_id: record.user_id,
            topic: record.topic,
            summary: record.summary,
            sources: record.sources,
            timestamp: record.timestamp,
        };
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::Store("store lock poisoned".to_string()))?;
        records.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<ResearchRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::Store("store lock poisoned".to_string()))?;
        let mut matching: Vec<ResearchRecord> = records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(matching)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::Store("store lock poisoned".to_string()))?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(AppError::Store(format!("record not found: {}", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(user_id: &str, topic: &str, hour: u32) -> NewResearchRecord {
        NewResearchRecord {
            user_id: user_id.to_string(),
            topic: topic.to_string(),
            summary: format!("summary of {}", topic),
            sources: vec!["https://example.com".to_string()],
            timestamp: Utc.with_ymd_and_hms(2026, 8, 1, hour, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_unique_ids() {
        let store = MemoryStore::new();
        let a = store.create(record("alice", "rust", 9)).await.unwrap();
        let b = store.create(record("alice", "tokio", 10)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn list_is_scoped_to_user_and_newest_first() {
        let store = MemoryStore::new();
        store.create(record("alice", "older", 9)).await.unwrap();
        store.create(record("bob", "other", 10)).await.unwrap();
        store.create(record("alice", "newer", 11)).await.unwrap();

        let records = store.list_for_user("alice").await.unwrap();
        let topics: Vec<&str> = records.iter().map(|r| r.topic.as_str()).collect();
        assert_eq!(topics, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let store = MemoryStore::new();
        let created = store.create(record("alice", "rust", 9)).await.unwrap();

        store.delete(&created.id).await.unwrap();
        assert!(store.list_for_user("alice").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_an_error() {
        let store = MemoryStore::new();
        let err = store.delete("no-such-id").await.unwrap_err();
        assert!(err.to_string().contains("record not found"));
    }
}
