use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::chronogram::Chronogram;
use crate::types::request::{ChronogramChanges, NewChronogram};
use crate::types::response::Message;
use crate::types::user::Identity;
use crate::validation::extract::Valid;

#[instrument(skip_all)]
pub(crate) async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<Chronogram>>, Error> {
    let chronograms = state.chronogram_controller.list(&identity).await?;

    Ok(Json(chronograms))
}

#[instrument(skip_all)]
pub(crate) async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Valid(params): Valid<NewChronogram>,
) -> Result<(StatusCode, Json<Chronogram>), Error> {
    let chronogram = state.chronogram_controller.create(&identity, params).await?;

    Ok((StatusCode::CREATED, Json(chronogram)))
}

#[instrument(skip(state, identity))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<Chronogram>, Error> {
    let chronogram = state.chronogram_controller.get(&identity, &id).await?;

    Ok(Json(chronogram))
}

#[instrument(skip(state, identity, changes))]
pub(crate) async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Valid(changes): Valid<ChronogramChanges>,
) -> Result<Json<Chronogram>, Error> {
    let chronogram = state
        .chronogram_controller
        .update(&identity, &id, changes)
        .await?;

    Ok(Json(chronogram))
}

#[instrument(skip(state, identity))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<Message>, Error> {
    state.chronogram_controller.delete(&identity, &id).await?;

    Ok(Json(Message::new("Cronograma removido com sucesso.")))
}
