use std::sync::Arc;

use sqlx::postgres::PgPool;

use crate::controllers::document::DocumentController;
use crate::controllers::user::UserController;
use crate::core::error::ConfigError;
use crate::store::memory::MemoryRepository;
use crate::store::postgres::PgRepository;
use crate::store::{Document, Repository};
use crate::token::{TokenConfig, TokenService};
use crate::types::chronogram::Chronogram;
use crate::types::flashcard::Flashcard;
use crate::types::notice::Notice;
use crate::types::study_module::StudyModule;
use crate::types::user::User;

#[derive(Clone, Debug)]
pub struct AppState {
    pub(crate) tokens: TokenService,
    pub(crate) user_controller: UserController,
    pub(crate) flashcard_controller: DocumentController<Flashcard>,
    pub(crate) chronogram_controller: DocumentController<Chronogram>,
    pub(crate) study_module_controller: DocumentController<StudyModule>,
    pub(crate) notice_controller: DocumentController<Notice>,
}

/// Hands out one repository per collection.
trait Backend {
    fn repository<T: Document>(&self) -> Arc<dyn Repository<T>>;
}

struct Memory;

impl Backend for Memory {
    fn repository<T: Document>(&self) -> Arc<dyn Repository<T>> {
        Arc::new(MemoryRepository::<T>::default())
    }
}

impl Backend for PgPool {
    fn repository<T: Document>(&self) -> Arc<dyn Repository<T>> {
        Arc::new(PgRepository::<T>::new(self.clone()))
    }
}

impl AppState {
    /// State backed by process memory. Everything is lost on shutdown.
    pub fn in_memory(tokens: TokenConfig, bcrypt_cost: u32) -> Self {
        Self::with_backend(&Memory, TokenService::new(tokens), bcrypt_cost)
    }

    pub(crate) async fn postgres(
        database_url: &str,
        tokens: TokenConfig,
        bcrypt_cost: u32,
    ) -> Result<Self, ConfigError> {
        let pool = crate::store::postgres::connect(database_url).await?;

        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(ConfigError::DatabaseMigration)?;

        Ok(Self::with_backend(
            &pool,
            TokenService::new(tokens),
            bcrypt_cost,
        ))
    }

    fn with_backend(backend: &impl Backend, tokens: TokenService, bcrypt_cost: u32) -> Self {
        AppState {
            user_controller: UserController::new(
                backend.repository::<User>(),
                tokens.clone(),
                bcrypt_cost,
            ),
            flashcard_controller: DocumentController::new(backend.repository()),
            chronogram_controller: DocumentController::new(backend.repository()),
            study_module_controller: DocumentController::new(backend.repository()),
            notice_controller: DocumentController::new(backend.repository()),
            tokens,
        }
    }

    /// The service that signs and checks credentials for this state.
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}
