use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::{NewUser, UpdatePasswordData, UserChanges};
use crate::types::response::{self, Message};
use crate::types::user::Identity;
use crate::validation::extract::Valid;

#[instrument(skip_all)]
pub(crate) async fn create(
    State(state): State<AppState>,
    Valid(params): Valid<NewUser>,
) -> Result<(StatusCode, Json<response::User>), Error> {
    let user = state.user_controller.register(params).await?;

    tracing::info!("Registered user {}", user.id);

    Ok((StatusCode::CREATED, Json(response::User::from(&user))))
}

#[instrument(skip_all)]
pub(crate) async fn me(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<response::User>, Error> {
    let user = state
        .user_controller
        .get(&identity, &identity.id.to_string())
        .await?;

    Ok(Json(response::User::from(&user)))
}

#[instrument(skip_all)]
pub(crate) async fn update_me(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Valid(changes): Valid<UserChanges>,
) -> Result<Json<response::User>, Error> {
    let user = state
        .user_controller
        .update(&identity, &identity.id.to_string(), changes)
        .await?;

    Ok(Json(response::User::from(&user)))
}

#[instrument(skip(state, identity))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<response::User>, Error> {
    let user = state.user_controller.get(&identity, &id).await?;

    Ok(Json(response::User::from(&user)))
}

#[instrument(skip(state, identity, changes))]
pub(crate) async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Valid(changes): Valid<UserChanges>,
) -> Result<Json<response::User>, Error> {
    let user = state.user_controller.update(&identity, &id, changes).await?;

    Ok(Json(response::User::from(&user)))
}

#[instrument(skip(state, identity, params))]
pub(crate) async fn change_password(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Valid(params): Valid<UpdatePasswordData>,
) -> Result<Json<Message>, Error> {
    state
        .user_controller
        .change_password(&identity, &id, params)
        .await?;

    Ok(Json(Message::new("Senha atualizada com sucesso.")))
}
