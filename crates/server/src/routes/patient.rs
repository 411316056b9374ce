//! Patient HTTP handlers.
//!
//! Path ids are taken as raw strings and parsed here so an unparseable id
//! lands in the same generic-failure branch as any other internal error,
//! and bodies are deserialized in the handler for the same reason. Every
//! path resolves to a JSON response; failures are always 400.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use deadpool_postgres::Pool;
use serde_json::{Value as JsonValue, json};

use citas_core::{PatientReq, PatientService, PatientUpdate, ServiceError};

use crate::db::PgPatientRepository;

fn service(pool: Pool) -> PatientService<PgPatientRepository> {
    PatientService::new(PgPatientRepository::new(pool))
}

/// GET /pacientes - List all patients
pub async fn list(State(pool): State<Pool>) -> Response {
    match service(pool).get_all_patients().await {
        Ok(patients) => (StatusCode::OK, Json(patients)).into_response(),
        Err(error) => {
            tracing::error!(%error, "Error getting all patients");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Error getting all patients" })),
            )
                .into_response()
        }
    }
}

/// POST /pacientes - Create a patient
pub async fn create(
    State(pool): State<Pool>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let req: PatientReq = match super::parse_body(body) {
        Ok(req) => req,
        Err(error) => {
            tracing::error!(%error, "Malformed patient create request");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Internal Server Error" })),
            )
                .into_response();
        }
    };

    match service(pool).create_patient(req).await {
        Ok(patient) => (StatusCode::CREATED, Json(patient)).into_response(),
        Err(error @ ServiceError::Creation(_)) => {
            tracing::error!(%error, "Failed creating a patient");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error_name": error.name(),
                    "message": "Failed Creating a patient"
                })),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!(%error, "Failed creating a patient");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Internal Server Error" })),
            )
                .into_response()
        }
    }
}

/// GET /pacientes/{id} - Get a patient by id
pub async fn get_by_id(State(pool): State<Pool>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Failed to retrieve patient" })),
        )
            .into_response();
    };

    match service(pool).get_patient_by_id(id).await {
        Ok(patient) => (StatusCode::OK, Json(patient)).into_response(),
        Err(error @ ServiceError::RecordNotFound) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to retrieve patient");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Failed to retrieve patient" })),
            )
                .into_response()
        }
    }
}

/// PUT /pacientes/{id} - Partially update a patient
pub async fn update(
    State(pool): State<Pool>,
    Path(id): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let generic = || {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Failed to update patient" })),
        )
            .into_response()
    };

    let Ok(id) = id.parse::<i64>() else {
        return generic();
    };
    let updates: PatientUpdate = match super::parse_body(body) {
        Ok(updates) => updates,
        Err(_) => return generic(),
    };

    match service(pool).update_patient(id, updates).await {
        Ok(patient) => (StatusCode::OK, Json(patient)).into_response(),
        Err(error @ (ServiceError::RecordNotFound | ServiceError::Update)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to update patient");
            generic()
        }
    }
}

/// DELETE /pacientes/{id} - Delete a patient
pub async fn delete(State(pool): State<Pool>, Path(id): Path<String>) -> Response {
    let generic = || {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Failed to delete patient" })),
        )
            .into_response()
    };

    let Ok(id) = id.parse::<i64>() else {
        return generic();
    };

    match service(pool).delete_patient(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Patient was deleted successfully" })),
        )
            .into_response(),
        Err(error @ ServiceError::Delete) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to delete patient");
            generic()
        }
    }
}
