use async_trait::async_trait;
use registry_model::{Graduate, GraduateFields};
use thiserror::Error;

pub mod memory;
pub mod mongo;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage behind the graduate CRUD endpoints.
///
/// Single-document operations only; request isolation is the backend's
/// atomicity, not coordination in this crate.
#[async_trait]
pub trait GraduateStore: Send + Sync {
    /// All records, newest first.
    async fn list_graduates(&self) -> StoreResult<Vec<Graduate>>;
    async fn get_graduate(&self, id: &str) -> StoreResult<Graduate>;
    /// Assigns the id and creation timestamp; `Conflict` on a duplicate
    /// student id.
    async fn create_graduate(&self, fields: GraduateFields) -> StoreResult<Graduate>;
    /// Full replace of the editable fields; id and creation timestamp are
    /// preserved.
    async fn update_graduate(&self, id: &str, fields: GraduateFields) -> StoreResult<Graduate>;
    async fn delete_graduate(&self, id: &str) -> StoreResult<()>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
