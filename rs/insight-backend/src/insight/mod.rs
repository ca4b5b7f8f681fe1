pub mod error;
pub mod process;
pub mod prompt;
pub mod reply;
pub mod request;
pub mod route;
