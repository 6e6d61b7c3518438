use crate::core::error::Error;

pub(crate) fn hash(password: &str, cost: u32) -> Result<String, Error> {
    bcrypt::hash(password, cost).map_err(Error::Bcrypt)
}

pub(crate) fn verify(password: &str, hash: &str) -> Result<bool, Error> {
    bcrypt::verify(password, hash).map_err(Error::Bcrypt)
}
