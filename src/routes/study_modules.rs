use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::{NewStudyModule, StudyModuleChanges};
use crate::types::response::Message;
use crate::types::study_module::StudyModule;
use crate::types::user::Identity;
use crate::validation::extract::Valid;

#[instrument(skip_all)]
pub(crate) async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<StudyModule>>, Error> {
    Ok(Json(state.study_module_controller.list(&identity).await?))
}

#[instrument(skip_all)]
pub(crate) async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Valid(params): Valid<NewStudyModule>,
) -> Result<(StatusCode, Json<StudyModule>), Error> {
    let module = state
        .study_module_controller
        .create(&identity, params)
        .await?;

    Ok((StatusCode::CREATED, Json(module)))
}

#[instrument(skip(state, identity))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<StudyModule>, Error> {
    Ok(Json(state.study_module_controller.get(&identity, &id).await?))
}

#[instrument(skip(state, identity, changes))]
pub(crate) async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Valid(changes): Valid<StudyModuleChanges>,
) -> Result<Json<StudyModule>, Error> {
    let module = state
        .study_module_controller
        .update(&identity, &id, changes)
        .await?;

    Ok(Json(module))
}

#[instrument(skip(state, identity))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<Message>, Error> {
    state.study_module_controller.delete(&identity, &id).await?;

    Ok(Json(Message::new("Módulo de estudo removido com sucesso.")))
}
