//! Notices are readable by every signed-in user. Only admins reach the
//! mutating handlers, and an admin may only edit the notices they posted.

use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::notice::Notice;
use crate::types::request::{NewNotice, NoticeChanges};
use crate::types::response::Message;
use crate::types::user::Identity;
use crate::validation::extract::Valid;

#[instrument(skip_all)]
pub(crate) async fn list(State(state): State<AppState>) -> Result<Json<Vec<Notice>>, Error> {
    Ok(Json(state.notice_controller.list_all().await?))
}

#[instrument(skip(state))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Notice>, Error> {
    Ok(Json(state.notice_controller.find(&id).await?))
}

#[instrument(skip_all)]
pub(crate) async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Valid(params): Valid<NewNotice>,
) -> Result<(StatusCode, Json<Notice>), Error> {
    let notice = state.notice_controller.create(&identity, params).await?;

    tracing::info!("Admin {} posted notice {}", identity.id, notice.id);

    Ok((StatusCode::CREATED, Json(notice)))
}

#[instrument(skip(state, identity, changes))]
pub(crate) async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Valid(changes): Valid<NoticeChanges>,
) -> Result<Json<Notice>, Error> {
    let notice = state
        .notice_controller
        .update(&identity, &id, changes)
        .await?;

    Ok(Json(notice))
}

#[instrument(skip(state, identity))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<Message>, Error> {
    state.notice_controller.delete(&identity, &id).await?;

    Ok(Json(Message::new("Aviso removido com sucesso.")))
}
