use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{NewResumeRecord, StoredResumeRecord};
use crate::storage::ResumeRepository;

#[derive(Debug)]
struct Inner {
    next_id: u64,
    records: BTreeMap<u64, StoredResumeRecord>,
}

/// Process-local store. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct InMemoryResumeStore {
    inner: RwLock<Inner>,
}

impl InMemoryResumeStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResumeRepository for InMemoryResumeStore {
    async fn create(&self, record: NewResumeRecord) -> Result<StoredResumeRecord> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let now = Utc::now();
        let stored = StoredResumeRecord {
            id,
            user_id: record.user_id,
            title: record.title,
            template: record.template,
            content: record.content,
            created_at: now,
            updated_at: now,
        };
        inner.records.insert(id, stored.clone());
        debug!(id, user_id = %stored.user_id, "Resume created");
        Ok(stored)
    }

    async fn get(&self, id: u64) -> Result<Option<StoredResumeRecord>> {
        Ok(self.inner.read().await.records.get(&id).cloned())
    }

    async fn update(&self, id: u64, record: NewResumeRecord) -> Result<Option<StoredResumeRecord>> {
        let mut inner = self.inner.write().await;
        let Some(existing) = inner.records.get_mut(&id) else {
            return Ok(None);
        };

        existing.user_id = record.user_id;
        existing.title = record.title;
        existing.template = record.template;
        existing.content = record.content;
        existing.updated_at = Utc::now().max(existing.created_at);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        Ok(self.inner.write().await.records.remove(&id).is_some())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<StoredResumeRecord>> {
        let inner = self.inner.read().await;
        let mut records: Vec<StoredResumeRecord> = inner
            .records
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }
}
