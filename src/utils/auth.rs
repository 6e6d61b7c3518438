use axum::Extension;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::user::Identity;

/// Resolves the bearer credential into an [`Identity`] request extension.
pub(crate) async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(Error::MissingCredential)?;

    let token = bearer_token(auth_header)?;

    let identity = state.tokens.verify(token)?;

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Lets the request through only for the elevated role.
pub(crate) async fn require_admin(
    Extension(identity): Extension<Identity>,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    if !identity.is_admin() {
        return Err(Error::Forbidden);
    }

    Ok(next.run(request).await)
}

fn bearer_token(value: &HeaderValue) -> Result<&str, Error> {
    let value = value.to_str().map_err(|_| Error::MalformedCredential)?;
    let mut parts = value.split_whitespace();

    // Auth schemes are case-insensitive.
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("Bearer") => Ok(token),
        _ => Err(Error::MalformedCredential),
    }
}
