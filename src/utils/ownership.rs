use crate::core::error::Error;
use crate::store::Document;
use crate::types::user::Identity;

/// Ownership check on a freshly loaded document.
pub(crate) trait OwnershipCheck<T> {
    /// Absent documents and documents owned by someone else are both reported
    /// as not found, so non-owners cannot probe for ids.
    fn owned_by(self, identity: &Identity) -> Result<T, Error>;

    /// Admins may act on any document; other non-owners are forbidden.
    fn owned_by_or_admin(self, identity: &Identity) -> Result<T, Error>;
}

impl<T: Document> OwnershipCheck<T> for Option<T> {
    fn owned_by(self, identity: &Identity) -> Result<T, Error> {
        match self {
            Some(document) if document.owner() == identity.id => Ok(document),
            _ => Err(Error::NotFound(T::RESOURCE)),
        }
    }

    fn owned_by_or_admin(self, identity: &Identity) -> Result<T, Error> {
        match self {
            Some(document) if document.owner() == identity.id || identity.is_admin() => {
                Ok(document)
            }
            Some(_) => Err(Error::Forbidden),
            None => Err(Error::NotFound(T::RESOURCE)),
        }
    }
}
