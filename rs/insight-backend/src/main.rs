use error::InsightBackendError;
use server::initialize_insight_backend;
use shared::setup_tracing;

pub mod error;
pub mod insight;
pub mod server;

#[rocket::main]
async fn main() -> Result<(), InsightBackendError> {
    dotenv::dotenv().ok();
    setup_tracing();

    let server = initialize_insight_backend()?;

    server.launch().await?;
    Ok(())
}
