use serde::Serialize;
use uuid::Uuid;

use crate::types::user::{self, Role};

/// Public view of a user; never carries the password hash.
#[derive(Debug, Serialize)]
pub(crate) struct User {
    pub(crate) id: Uuid,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) role: Role,
}

impl From<&user::User> for User {
    fn from(user: &user::User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Session {
    pub(crate) user: User,
    pub(crate) token: String,
}

impl Session {
    pub(crate) fn new(user: &user::User, token: String) -> Self {
        Self {
            user: User::from(user),
            token,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Message {
    pub(crate) message: &'static str,
}

impl Message {
    pub(crate) fn new(message: &'static str) -> Self {
        Self { message }
    }
}
