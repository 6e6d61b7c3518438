use std::time::Duration;

use config::Config;
use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::token::TokenConfig;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Storage {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Args {
    pub(crate) port: u16,
    pub(crate) log_level: String,
    pub(crate) secret: String,
    /// Credential lifetime in seconds.
    pub(crate) token_ttl: u64,
    pub(crate) bcrypt_cost: u32,
    pub(crate) storage: Storage,
    pub(crate) database_host: Option<String>,
    pub(crate) database_port: u16,
    pub(crate) database_name: Option<String>,
    pub(crate) database_user: Option<String>,
    pub(crate) database_password: Option<String>,
}

impl Args {
    /// Reads `STUDYDESK_*` environment variables over the defaults.
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("port", 3333)?
            .set_default("log_level", "info")?
            .set_default("token_ttl", 86_400)?
            .set_default("bcrypt_cost", 10)?
            .set_default("storage", "postgres")?
            .set_default("database_port", 5432)?
            .add_source(config::Environment::with_prefix("STUDYDESK"))
            .build()?;

        Ok(config.try_deserialize::<Args>()?)
    }

    pub(crate) fn database_url(&self) -> Result<String, ConfigError> {
        Ok(format!(
            "postgresql://{}:{}@{}:{}/{}",
            setting(&self.database_user, "database_user")?,
            setting(&self.database_password, "database_password")?,
            setting(&self.database_host, "database_host")?,
            self.database_port,
            setting(&self.database_name, "database_name")?,
        ))
    }

    pub(crate) fn token_config(&self) -> TokenConfig {
        TokenConfig {
            secret: self.secret.clone(),
            ttl: Duration::from_secs(self.token_ttl),
        }
    }
}

fn setting<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, ConfigError> {
    value.as_deref().ok_or(ConfigError::MissingSetting(name))
}
