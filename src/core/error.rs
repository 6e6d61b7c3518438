use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::store::StoreError;
use crate::token::TokenError;
use crate::types::Resource;
use crate::validation::ValidationError;

const INTERNAL_MESSAGE: &str = "Erro interno do servidor.";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Missing setting: {0}")]
    MissingSetting(&'static str),
    #[error("Database migration error: {0}")]
    DatabaseMigration(#[from] sqlx::migrate::MigrateError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid JSON body")]
    InvalidJson,
    #[error("Missing JSON content type")]
    MissingContentType,
    #[error("No credentials provided")]
    MissingCredential,
    #[error("Malformed credentials")]
    MalformedCredential,
    #[error("Invalid JWT")]
    InvalidCredential,
    #[error("Expired JWT")]
    ExpiredCredential,
    #[error("Invalid email or password")]
    InvalidLogin,
    #[error("Current password does not match")]
    IncorrectPassword,
    #[error("Forbidden")]
    Forbidden,
    #[error("{0} not found")]
    NotFound(Resource),
    #[error("Email already registered")]
    EmailTaken,
    #[error("Route not found")]
    UnknownRoute,
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("Token error: {0}")]
    Token(TokenError),
}

impl From<TokenError> for Error {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Invalid => Error::InvalidCredential,
            TokenError::Expired => Error::ExpiredCredential,
            TokenError::Internal(_) => Error::Token(error),
        }
    }
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_)
            | Error::InvalidJson
            | Error::MissingContentType
            | Error::IncorrectPassword => StatusCode::BAD_REQUEST,
            Error::MissingCredential
            | Error::MalformedCredential
            | Error::InvalidCredential
            | Error::ExpiredCredential
            | Error::InvalidLogin => StatusCode::UNAUTHORIZED,
            Error::Forbidden => StatusCode::FORBIDDEN,
            Error::NotFound(_) | Error::UnknownRoute => StatusCode::NOT_FOUND,
            Error::EmailTaken => StatusCode::CONFLICT,
            Error::Store(_) | Error::Bcrypt(_) | Error::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match self {
            Error::Validation(e) => e.to_string(),
            Error::InvalidJson => "request body must be valid JSON".into(),
            Error::MissingContentType => {
                "request body must be sent as application/json".into()
            }
            Error::MissingCredential => "Token não enviado.".into(),
            Error::MalformedCredential => "Token mal formatado.".into(),
            Error::InvalidCredential => "Token inválido.".into(),
            Error::ExpiredCredential => "Token expirado.".into(),
            Error::InvalidLogin => "Credenciais inválidas.".into(),
            Error::IncorrectPassword => "Senha atual incorreta.".into(),
            Error::Forbidden => "Acesso negado.".into(),
            Error::NotFound(resource) => resource.not_found_message().into(),
            Error::EmailTaken => "E-mail já cadastrado.".into(),
            Error::UnknownRoute => "Rota não encontrada.".into(),
            Error::Store(_) | Error::Bcrypt(_) | Error::Token(_) => {
                INTERNAL_MESSAGE.into()
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("{:?}", self);
        } else {
            tracing::debug!("{}", self);
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

pub(crate) async fn handle_unknown_route() -> Error {
    Error::UnknownRoute
}

pub(crate) fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic"
    };

    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_MESSAGE })),
    )
        .into_response()
}
