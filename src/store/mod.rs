//! Persistence collaborator.
//!
//! Each resource is a document in a named collection, owned by the user that
//! created it. Controllers talk to a [`Repository`] and never see the backend.

pub(crate) mod memory;
pub(crate) mod postgres;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::types::Resource;

pub(crate) trait Document:
    Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static
{
    const COLLECTION: &'static str;
    const RESOURCE: Resource;

    fn id(&self) -> Uuid;

    /// Id of the user the document belongs to.
    fn owner(&self) -> Uuid;

    /// Value no two documents of the collection may share.
    fn unique_key(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Duplicate document")]
    Duplicate,
}

#[async_trait]
pub(crate) trait Repository<T: Document>: Send + Sync {
    async fn create(&self, document: T) -> Result<T, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError>;

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<T>, StoreError>;

    async fn find_all(&self) -> Result<Vec<T>, StoreError>;

    /// First document whose top-level string `field` equals `value`.
    async fn find_one_by(&self, field: &str, value: &str) -> Result<Option<T>, StoreError>;

    async fn update_by_id(&self, id: Uuid, document: T) -> Result<Option<T>, StoreError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError>;
}
