mod appointment;
mod doctor;
pub mod health;
mod patient;

use axum::{Json, Router, extract::rejection::JsonRejection, routing::get};
use deadpool_postgres::Pool;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// Deserialize a request body into the target shape. Extractor rejections
/// (wrong content type, unparseable JSON) and shape mismatches are folded
/// into one error so the caller's generic failure branch covers them all
/// and every path still answers with the contract's 400 JSON.
pub(crate) fn parse_body<T: DeserializeOwned>(
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<T, String> {
    match body {
        Ok(Json(value)) => serde_json::from_value(value).map_err(|error| error.to_string()),
        Err(rejection) => Err(rejection.to_string()),
    }
}

/// Build the entity routes mounted under the API prefix
pub fn api_routes() -> Router<Pool> {
    Router::new()
        .route("/pacientes", get(patient::list).post(patient::create))
        .route(
            "/pacientes/{id}",
            get(patient::get_by_id)
                .put(patient::update)
                .delete(patient::delete),
        )
        .route("/doctores", get(doctor::list).post(doctor::create))
        .route(
            "/doctores/{id}",
            get(doctor::get_by_id)
                .put(doctor::update)
                .delete(doctor::delete),
        )
        .route("/citas", get(appointment::list).post(appointment::create))
        .route(
            "/citas/{id}",
            get(appointment::get_by_id)
                .put(appointment::update)
                .delete(appointment::delete),
        )
}
