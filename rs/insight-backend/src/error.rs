use shared::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightBackendError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Rocket error: {0}")]
    RocketError(#[from] rocket::Error),
}
