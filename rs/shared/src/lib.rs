pub mod connections;
pub mod constant;
pub mod mock;
pub mod router;
pub mod tracing;

// openai
pub use crate::connections::openai::config::OpenAISettings;
pub use crate::connections::openai::error::OpenAIRequestError;
pub use crate::connections::openai::openai_connection::OpenAIConnection;

// util
pub use crate::connections::{get_env_var, ConfigError};
pub use crate::tracing::setup::setup_tracing;
