use rocket::data::{Limits, ToByteUnit};
use rocket::serde::json::{json, Value};
use rocket::{catch, catchers, Build, Rocket, Route};

use crate::connections::openai::openai_connection::OpenAIConnection;
use crate::constant::INSIGHT_BODY_LIMIT_MEBIBYTES;

pub fn build_rocket(openai_connection: OpenAIConnection, routes: Vec<Route>) -> Rocket<Build> {
    // embedded insight records run to tens of kilobytes each, far past
    // Rocket's default 8 KiB string limit
    let limits = Limits::default().limit("string", INSIGHT_BODY_LIMIT_MEBIBYTES.mebibytes());
    let figment = rocket::Config::figment().merge(("limits", limits));
    rocket::custom(figment)
        .attach(openai_connection)
        .mount("/", routes)
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                payload_too_large,
                unprocessable,
                internal_error
            ],
        )
}

#[catch(400)]
fn bad_request() -> Value {
    json!({"message": "Bad request."})
}

#[catch(404)]
fn not_found() -> Value {
    json!({"message": "Resource not found."})
}

#[catch(413)]
fn payload_too_large() -> Value {
    json!({"message": "Payload too large."})
}

#[catch(422)]
fn unprocessable() -> Value {
    json!({"message": "Malformed JSON body."})
}

#[catch(500)]
fn internal_error() -> Value {
    // TODO: add a request id to trace errors
    json!({"message": "Internal Server Error. Please try again later."})
}
