use rocket::{routes, Build, Rocket};
use shared::constant::INSIGHT_BACKEND_PORT;
use shared::router::rocket::build_rocket;
use shared::{OpenAIConnection, OpenAISettings};

use crate::error::InsightBackendError;
use crate::insight::route::generate_insights;

pub fn initialize_insight_backend() -> Result<Rocket<Build>, InsightBackendError> {
    std::env::set_var("ROCKET_PORT", INSIGHT_BACKEND_PORT);
    let settings = OpenAISettings::new()?;
    let openai = OpenAIConnection::new(&settings);
    let server = build_rocket(openai, routes![generate_insights]);
    Ok(server)
}
