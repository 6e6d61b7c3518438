use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::types::Json;
use uuid::Uuid;

use crate::core::error::ConfigError;
use crate::store::{Document, Repository, StoreError};

pub(crate) async fn connect(database_url: &str) -> Result<PgPool, ConfigError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Stores every collection in the `documents` table, one JSONB body per row.
pub(crate) struct PgRepository<T> {
    pool: PgPool,
    _document: PhantomData<fn() -> T>,
}

impl<T> PgRepository<T> {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _document: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Document> Repository<T> for PgRepository<T> {
    async fn create(&self, document: T) -> Result<T, StoreError> {
        match sqlx::query(
            "INSERT INTO documents (id, collection, owner_id, document)
            VALUES ($1, $2, $3, $4)
            RETURNING document;",
        )
        .bind(document.id())
        .bind(T::COLLECTION)
        .bind(document.owner())
        .bind(Json(&document))
        .try_map(map_document::<T>)
        .fetch_one(&self.pool)
        .await
        {
            Ok(document) => Ok(document),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::Duplicate)
            }
            Err(e) => Err(StoreError::Sql(e)),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        let document = sqlx::query(
            "SELECT document FROM documents
            WHERE collection = $1 AND id = $2;",
        )
        .bind(T::COLLECTION)
        .bind(id)
        .try_map(map_document::<T>)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<T>, StoreError> {
        let documents = sqlx::query(
            "SELECT document FROM documents
            WHERE collection = $1 AND owner_id = $2
            ORDER BY created_at;",
        )
        .bind(T::COLLECTION)
        .bind(owner)
        .try_map(map_document::<T>)
        .fetch_all(&self.pool)
        .await?;

        Ok(documents)
    }

    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        let documents = sqlx::query(
            "SELECT document FROM documents
            WHERE collection = $1
            ORDER BY created_at;",
        )
        .bind(T::COLLECTION)
        .try_map(map_document::<T>)
        .fetch_all(&self.pool)
        .await?;

        Ok(documents)
    }

    async fn find_one_by(&self, field: &str, value: &str) -> Result<Option<T>, StoreError> {
        let document = sqlx::query(
            "SELECT document FROM documents
            WHERE collection = $1 AND document ->> $2 = $3
            LIMIT 1;",
        )
        .bind(T::COLLECTION)
        .bind(field)
        .bind(value)
        .try_map(map_document::<T>)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }

    async fn update_by_id(&self, id: Uuid, document: T) -> Result<Option<T>, StoreError> {
        match sqlx::query(
            "UPDATE documents
            SET document = $3, owner_id = $4, modified_at = now()
            WHERE collection = $1 AND id = $2
            RETURNING document;",
        )
        .bind(T::COLLECTION)
        .bind(id)
        .bind(Json(&document))
        .bind(document.owner())
        .try_map(map_document::<T>)
        .fetch_optional(&self.pool)
        .await
        {
            Ok(document) => Ok(document),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::Duplicate)
            }
            Err(e) => Err(StoreError::Sql(e)),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        let document = sqlx::query(
            "DELETE FROM documents
            WHERE collection = $1 AND id = $2
            RETURNING document;",
        )
        .bind(T::COLLECTION)
        .bind(id)
        .try_map(map_document::<T>)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }
}

fn map_document<T: Document>(row: PgRow) -> Result<T, sqlx::Error> {
    let Json(document) = row.try_get::<Json<T>, _>("document")?;

    Ok(document)
}
