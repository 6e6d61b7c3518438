use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::Error;
use crate::validation::schemas::Schematic;
use crate::validation::{ValidationError, validate};

/// JSON body that passed its schema. Runs after the auth layers, so an
/// unauthenticated request is rejected before its payload is looked at.
#[derive(Debug)]
pub(crate) struct Valid<T>(pub(crate) T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Schematic,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<Value>::from_request(request, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                match rejection {
                    JsonRejection::MissingJsonContentType(_) => Error::MissingContentType,
                    _ => Error::InvalidJson,
                }
            })?;

        validate(&payload, T::schema(), T::mode())?;

        let params = serde_json::from_value(payload)
            .map_err(|e| Error::Validation(ValidationError::new(e.to_string())))?;

        Ok(Valid(params))
    }
}
