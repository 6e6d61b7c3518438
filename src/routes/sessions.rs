use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::LoginData;
use crate::types::response::Session;
use crate::validation::extract::Valid;

#[instrument(skip_all)]
pub(crate) async fn create(
    State(state): State<AppState>,
    Valid(params): Valid<LoginData>,
) -> Result<(StatusCode, Json<Session>), Error> {
    let (user, token) = state.user_controller.login(params).await?;

    tracing::debug!("Opened session for user {}", user.id);

    Ok((StatusCode::CREATED, Json(Session::new(&user, token))))
}
