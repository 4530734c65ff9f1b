//! Resume persistence behind a repository trait.
//!
//! `AppState` holds an `Arc<dyn ResumeRepository>`. The only backend today is
//! `InMemoryResumeStore`; records live for the lifetime of the process.

pub mod handlers;
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{NewResumeRecord, StoredResumeRecord};

pub use memory::InMemoryResumeStore;

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Stores a new record and returns it with its assigned id and timestamps.
    async fn create(&self, record: NewResumeRecord) -> Result<StoredResumeRecord>;

    async fn get(&self, id: u64) -> Result<Option<StoredResumeRecord>>;

    /// Full replace of the client-editable fields. `None` when `id` is unknown.
    async fn update(&self, id: u64, record: NewResumeRecord) -> Result<Option<StoredResumeRecord>>;

    /// `true` when a record was removed.
    async fn delete(&self, id: u64) -> Result<bool>;

    /// Every record owned by `user_id`, most recently updated first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<StoredResumeRecord>>;
}
