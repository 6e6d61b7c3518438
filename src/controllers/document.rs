use std::sync::Arc;

use crate::controllers::parse_id;
use crate::core::error::Error;
use crate::store::Repository;
use crate::types::Editable;
use crate::types::user::Identity;
use crate::utils::ownership::OwnershipCheck;

/// Owner-scoped CRUD over one collection.
pub(crate) struct DocumentController<T> {
    documents: Arc<dyn Repository<T>>,
}

impl<T> Clone for DocumentController<T> {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
        }
    }
}

impl<T: Editable> std::fmt::Debug for DocumentController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentController")
            .field("collection", &T::COLLECTION)
            .finish()
    }
}

impl<T: Editable> DocumentController<T> {
    pub(crate) fn new(documents: Arc<dyn Repository<T>>) -> Self {
        Self { documents }
    }

    pub(crate) async fn create(&self, identity: &Identity, params: T::New) -> Result<T, Error> {
        let document = self.documents.create(T::create(identity.id, params)).await?;

        tracing::debug!("Created {} {}", T::RESOURCE, document.id());

        Ok(document)
    }

    /// Inserts in payload order. The payload was validated as a whole, so a
    /// storage failure is the only way to stop part way through.
    pub(crate) async fn create_many(
        &self,
        identity: &Identity,
        params: Vec<T::New>,
    ) -> Result<Vec<T>, Error> {
        let mut created = Vec::with_capacity(params.len());

        for params in params {
            created.push(self.documents.create(T::create(identity.id, params)).await?);
        }

        tracing::debug!("Created {} {}s", created.len(), T::RESOURCE);

        Ok(created)
    }

    pub(crate) async fn list(&self, identity: &Identity) -> Result<Vec<T>, Error> {
        Ok(self.documents.find_by_owner(identity.id).await?)
    }

    pub(crate) async fn list_all(&self) -> Result<Vec<T>, Error> {
        Ok(self.documents.find_all().await?)
    }

    pub(crate) async fn get(&self, identity: &Identity, id: &str) -> Result<T, Error> {
        self.documents
            .find_by_id(parse_id(id, T::RESOURCE)?)
            .await?
            .owned_by(identity)
    }

    /// Lookup without an ownership check, for collections everyone may read.
    pub(crate) async fn find(&self, id: &str) -> Result<T, Error> {
        self.documents
            .find_by_id(parse_id(id, T::RESOURCE)?)
            .await?
            .ok_or(Error::NotFound(T::RESOURCE))
    }

    pub(crate) async fn update(
        &self,
        identity: &Identity,
        id: &str,
        changes: T::Changes,
    ) -> Result<T, Error> {
        let id = parse_id(id, T::RESOURCE)?;
        let mut document = self.documents.find_by_id(id).await?.owned_by(identity)?;

        document.apply(changes);

        self.documents
            .update_by_id(id, document)
            .await?
            .ok_or(Error::NotFound(T::RESOURCE))
    }

    pub(crate) async fn delete(&self, identity: &Identity, id: &str) -> Result<T, Error> {
        let id = parse_id(id, T::RESOURCE)?;

        self.documents.find_by_id(id).await?.owned_by(identity)?;

        self.remove(id).await
    }

    /// Like [`Self::delete`], but admins may remove anyone's document and
    /// other non-owners are told they are forbidden.
    pub(crate) async fn delete_as_owner_or_admin(
        &self,
        identity: &Identity,
        id: &str,
    ) -> Result<T, Error> {
        let id = parse_id(id, T::RESOURCE)?;

        self.documents
            .find_by_id(id)
            .await?
            .owned_by_or_admin(identity)?;

        self.remove(id).await
    }

    async fn remove(&self, id: uuid::Uuid) -> Result<T, Error> {
        let document = self
            .documents
            .delete_by_id(id)
            .await?
            .ok_or(Error::NotFound(T::RESOURCE))?;

        tracing::debug!("Deleted {} {}", T::RESOURCE, id);

        Ok(document)
    }
}
