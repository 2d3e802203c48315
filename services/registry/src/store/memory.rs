//! In-memory implementation of the graduate store.
//!
//! # Purpose
//! Implements [`GraduateStore`] entirely in a `HashMap` guarded by
//! `tokio::sync::RwLock`. It exists for:
//! - local development and tests (no external dependencies)
//! - deployments where durability is not required
//! - as a fallback when MongoDB is not configured
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: mutations take the write lock, reads the
//!   read lock.
//! - **No multi-node coordination**: multiple registry instances each have
//!   independent state.
//!
//! # Metrics
//! Updates the same record-count gauge and operation counters as the durable
//! backend so dashboards behave identically in both modes.
use super::{GraduateStore, StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use registry_model::{Graduate, GraduateFields};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory graduate store.
///
/// Records are keyed by their store-assigned id; the student-id uniqueness
/// the durable backend gets from an index is enforced here by scanning under
/// the write lock.
pub struct InMemoryStore {
    records: Arc<RwLock<HashMap<String, Graduate>>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl GraduateStore for InMemoryStore {
    async fn list_graduates(&self) -> StoreResult<Vec<Graduate>> {
        let mut items: Vec<Graduate> = self.records.read().await.values().cloned().collect();
        // Newest first; id as a tie-breaker keeps the order deterministic.
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(items)
    }

    async fn get_graduate(&self, id: &str) -> StoreResult<Graduate> {
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("graduate".into()))
    }

    async fn create_graduate(&self, fields: GraduateFields) -> StoreResult<Graduate> {
        let mut records = self.records.write().await;
        if records
            .values()
            .any(|existing| existing.student_id == fields.student_id)
        {
            return Err(StoreError::Conflict("student id exists".into()));
        }
        let graduate = Graduate::from_fields(Uuid::new_v4().to_string(), Utc::now(), fields);
        records.insert(graduate.id.clone(), graduate.clone());
        metrics::counter!("registry_graduate_ops_total", "op" => "created").increment(1);
        metrics::gauge!("registry_graduates_total").set(records.len() as f64);
        Ok(graduate)
    }

    async fn update_graduate(&self, id: &str, fields: GraduateFields) -> StoreResult<Graduate> {
        let mut records = self.records.write().await;
        if records
            .values()
            .any(|existing| existing.student_id == fields.student_id && existing.id != id)
        {
            return Err(StoreError::Conflict("student id exists".into()));
        }
        let record = records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound("graduate".into()))?;
        *record = Graduate::from_fields(record.id.clone(), record.created_at, fields);
        let updated = record.clone();
        metrics::counter!("registry_graduate_ops_total", "op" => "updated").increment(1);
        Ok(updated)
    }

    async fn delete_graduate(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if records.remove(id).is_none() {
            return Err(StoreError::NotFound("graduate".into()));
        }
        metrics::counter!("registry_graduate_ops_total", "op" => "deleted").increment(1);
        metrics::gauge!("registry_graduates_total").set(records.len() as f64);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        // Always "healthy" if the process is running; the durable backend
        // probes connectivity instead.
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
