use crate::connections::ConfigError;
use crate::get_env_var;

/// Credentials resolved once at startup. A missing key aborts launch
/// instead of failing on the first request.
#[derive(Clone)]
pub struct OpenAISettings {
    pub api_key: String,
}

impl OpenAISettings {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: get_env_var("OPENAI_API_KEY")?,
        })
    }
}
