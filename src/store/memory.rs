use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{Document, Repository, StoreError};

/// In-process repository, kept in insertion order. Nothing survives a restart.
pub(crate) struct MemoryRepository<T> {
    documents: RwLock<Vec<T>>,
}

/// True when `document` would share its id or unique key with a stored
/// document other than the one it replaces.
fn collides<T: Document>(documents: &[T], document: &T, replacing: Option<Uuid>) -> bool {
    documents
        .iter()
        .filter(|stored| Some(stored.id()) != replacing)
        .any(|stored| {
            stored.id() == document.id()
                || (document.unique_key().is_some()
                    && stored.unique_key() == document.unique_key())
        })
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<T: Document> Repository<T> for MemoryRepository<T> {
    async fn create(&self, document: T) -> Result<T, StoreError> {
        let mut documents = self.documents.write().await;

        if collides(&documents, &document, None) {
            return Err(StoreError::Duplicate);
        }

        documents.push(document.clone());

        Ok(document)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        let documents = self.documents.read().await;

        Ok(documents.iter().find(|stored| stored.id() == id).cloned())
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<T>, StoreError> {
        let documents = self.documents.read().await;

        Ok(documents
            .iter()
            .filter(|stored| stored.owner() == owner)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.documents.read().await.clone())
    }

    async fn find_one_by(&self, field: &str, value: &str) -> Result<Option<T>, StoreError> {
        let documents = self.documents.read().await;

        for stored in documents.iter() {
            let body = serde_json::to_value(stored)?;

            if body.get(field).and_then(Value::as_str) == Some(value) {
                return Ok(Some(stored.clone()));
            }
        }

        Ok(None)
    }

    async fn update_by_id(&self, id: Uuid, document: T) -> Result<Option<T>, StoreError> {
        let mut documents = self.documents.write().await;

        if collides(&documents, &document, Some(id)) {
            return Err(StoreError::Duplicate);
        }

        match documents.iter_mut().find(|stored| stored.id() == id) {
            Some(stored) => {
                *stored = document.clone();
                Ok(Some(document))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        let mut documents = self.documents.write().await;

        match documents.iter().position(|stored| stored.id() == id) {
            Some(index) => Ok(Some(documents.remove(index))),
            None => Ok(None),
        }
    }
}
