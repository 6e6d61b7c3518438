pub(crate) mod controllers;
pub(crate) mod core;
pub(crate) mod routes;
pub(crate) mod store;
pub(crate) mod token;
pub(crate) mod types;
pub(crate) mod utils;
pub(crate) mod validation;

use axum::Router;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::core::config::{Args, Storage};
use crate::core::error::ConfigError as Error;

pub use crate::core::state::AppState;
pub use crate::token::{TokenConfig, TokenError, TokenService};
pub use crate::types::user::{Identity, Role};

/// The full HTTP surface over the given state.
pub fn app(state: AppState) -> Router {
    routes::router::routes(state)
}

pub async fn run() -> Result<(), Error> {
    let config = Args::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_level).unwrap_or_default())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = match config.storage {
        Storage::Postgres => {
            AppState::postgres(
                &config.database_url()?,
                config.token_config(),
                config.bcrypt_cost,
            )
            .await?
        }
        Storage::Memory => {
            tracing::warn!("Using in-memory storage, data will not survive a restart");
            AppState::in_memory(config.token_config(), config.bcrypt_cost)
        }
    };

    let app = app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(Error::IO)?;

    tracing::info!("listening on port {}", config.port);

    axum::serve(listener, app).await.map_err(Error::IO)?;

    Ok(())
}
