mod error;
pub mod openai;
mod util;

pub use crate::connections::error::ConfigError;
pub use crate::connections::util::get_env_var;
