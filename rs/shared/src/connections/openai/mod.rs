pub mod config;
pub mod error;
pub mod fairing;
pub mod messages;
pub mod openai_connection;
