pub(crate) mod document;
pub(crate) mod user;

use uuid::Uuid;

use crate::core::error::Error;
use crate::types::Resource;

/// Ids that do not parse cannot name a stored document.
pub(crate) fn parse_id(id: &str, resource: Resource) -> Result<Uuid, Error> {
    Uuid::parse_str(id).map_err(|_| Error::NotFound(resource))
}
