use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::flashcard::Flashcard;
use crate::types::request::{FlashcardChanges, NewFlashcard, NewFlashcards};
use crate::types::response::Message;
use crate::types::user::Identity;
use crate::validation::extract::Valid;

#[instrument(skip_all)]
pub(crate) async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<Flashcard>>, Error> {
    let flashcards = state.flashcard_controller.list(&identity).await?;

    Ok(Json(flashcards))
}

#[instrument(skip_all)]
pub(crate) async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Valid(params): Valid<NewFlashcard>,
) -> Result<(StatusCode, Json<Flashcard>), Error> {
    let flashcard = state.flashcard_controller.create(&identity, params).await?;

    Ok((StatusCode::CREATED, Json(flashcard)))
}

#[instrument(skip_all)]
pub(crate) async fn create_many(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Valid(params): Valid<NewFlashcards>,
) -> Result<(StatusCode, Json<Vec<Flashcard>>), Error> {
    let flashcards = state
        .flashcard_controller
        .create_many(&identity, params.flashcards)
        .await?;

    Ok((StatusCode::CREATED, Json(flashcards)))
}

#[instrument(skip(state, identity))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<Flashcard>, Error> {
    let flashcard = state.flashcard_controller.get(&identity, &id).await?;

    Ok(Json(flashcard))
}

#[instrument(skip(state, identity, changes))]
pub(crate) async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Valid(changes): Valid<FlashcardChanges>,
) -> Result<Json<Flashcard>, Error> {
    let flashcard = state
        .flashcard_controller
        .update(&identity, &id, changes)
        .await?;

    Ok(Json(flashcard))
}

/// Admins may delete any flashcard.
#[instrument(skip(state, identity))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<Message>, Error> {
    state
        .flashcard_controller
        .delete_as_owner_or_admin(&identity, &id)
        .await?;

    Ok(Json(Message::new("Flashcard removido com sucesso.")))
}
