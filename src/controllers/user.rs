use std::sync::Arc;

use crate::controllers::parse_id;
use crate::core::error::Error;
use crate::store::{Repository, StoreError};
use crate::token::TokenService;
use crate::types::Resource;
use crate::types::request::{LoginData, NewUser, UpdatePasswordData, UserChanges};
use crate::types::user::{Identity, User, normalize_email};
use crate::utils::ownership::OwnershipCheck;
use crate::utils::password;

#[derive(Clone)]
pub(crate) struct UserController {
    users: Arc<dyn Repository<User>>,
    tokens: TokenService,
    bcrypt_cost: u32,
}

impl std::fmt::Debug for UserController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserController")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl UserController {
    pub(crate) fn new(
        users: Arc<dyn Repository<User>>,
        tokens: TokenService,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    pub(crate) async fn register(&self, params: NewUser) -> Result<User, Error> {
        let email = normalize_email(&params.email);

        self.ensure_email_free(&email).await?;

        let password_hash = password::hash(&params.password, self.bcrypt_cost)?;

        match self
            .users
            .create(User::new(params.name, email, password_hash))
            .await
        {
            Ok(user) => Ok(user),
            Err(StoreError::Duplicate) => Err(Error::EmailTaken),
            Err(e) => Err(Error::Store(e)),
        }
    }

    pub(crate) async fn login(&self, params: LoginData) -> Result<(User, String), Error> {
        let user = self
            .users
            .find_one_by("email", &normalize_email(&params.email))
            .await?
            .ok_or(Error::InvalidLogin)?;

        if !password::verify(&params.password, &user.password_hash)? {
            return Err(Error::InvalidLogin);
        }

        let token = self.tokens.issue(&Identity::from(&user))?;

        Ok((user, token))
    }

    /// Users can read themselves; admins can read anyone.
    pub(crate) async fn get(&self, identity: &Identity, id: &str) -> Result<User, Error> {
        let user = self.users.find_by_id(parse_id(id, Resource::User)?).await?;

        match identity.is_admin() {
            true => user.ok_or(Error::NotFound(Resource::User)),
            false => user.owned_by(identity),
        }
    }

    pub(crate) async fn update(
        &self,
        identity: &Identity,
        id: &str,
        changes: UserChanges,
    ) -> Result<User, Error> {
        let id = parse_id(id, Resource::User)?;
        let mut user = self.users.find_by_id(id).await?.owned_by(identity)?;

        if let Some(email) = &changes.email {
            let email = normalize_email(email);
            if email != user.email {
                self.ensure_email_free(&email).await?;
            }
        }

        user.apply(changes);

        match self.users.update_by_id(id, user).await {
            Ok(user) => user.ok_or(Error::NotFound(Resource::User)),
            Err(StoreError::Duplicate) => Err(Error::EmailTaken),
            Err(e) => Err(Error::Store(e)),
        }
    }

    pub(crate) async fn change_password(
        &self,
        identity: &Identity,
        id: &str,
        params: UpdatePasswordData,
    ) -> Result<(), Error> {
        let id = parse_id(id, Resource::User)?;
        let mut user = self.users.find_by_id(id).await?.owned_by(identity)?;

        if !password::verify(&params.current_password, &user.password_hash)? {
            return Err(Error::IncorrectPassword);
        }

        user.password_hash = password::hash(&params.new_password, self.bcrypt_cost)?;
        user.updated_at = chrono::Utc::now();

        self.users
            .update_by_id(id, user)
            .await?
            .ok_or(Error::NotFound(Resource::User))?;

        Ok(())
    }

    async fn ensure_email_free(&self, email: &str) -> Result<(), Error> {
        match self.users.find_one_by("email", email).await? {
            Some(_) => Err(Error::EmailTaken),
            None => Ok(()),
        }
    }
}
