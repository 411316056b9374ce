//! Doctor HTTP handlers; same mapping policy as the patient handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use deadpool_postgres::Pool;
use serde_json::{Value as JsonValue, json};

use citas_core::{DoctorReq, DoctorService, DoctorUpdate, ServiceError};

use crate::db::PgDoctorRepository;

fn service(pool: Pool) -> DoctorService<PgDoctorRepository> {
    DoctorService::new(PgDoctorRepository::new(pool))
}

/// GET /doctores - List all doctors
pub async fn list(State(pool): State<Pool>) -> Response {
    match service(pool).get_all_doctors().await {
        Ok(doctors) => (StatusCode::OK, Json(doctors)).into_response(),
        Err(error) => {
            tracing::error!(%error, "Error getting all doctors");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Error getting all doctors" })),
            )
                .into_response()
        }
    }
}

/// POST /doctores - Create a doctor
pub async fn create(
    State(pool): State<Pool>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let req: DoctorReq = match super::parse_body(body) {
        Ok(req) => req,
        Err(error) => {
            tracing::error!(%error, "Malformed doctor create request");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Internal Server Error" })),
            )
                .into_response();
        }
    };

    match service(pool).create_doctor(req).await {
        Ok(doctor) => (StatusCode::CREATED, Json(doctor)).into_response(),
        Err(error @ ServiceError::Creation(_)) => {
            tracing::error!(%error, "Failed creating a doctor");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error_name": error.name(),
                    "message": "Failed Creating a doctor"
                })),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!(%error, "Failed creating a doctor");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Internal Server Error" })),
            )
                .into_response()
        }
    }
}

/// GET /doctores/{id} - Get a doctor by id
pub async fn get_by_id(State(pool): State<Pool>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Failed to retrieve doctor" })),
        )
            .into_response();
    };

    match service(pool).get_doctor_by_id(id).await {
        Ok(doctor) => (StatusCode::OK, Json(doctor)).into_response(),
        Err(error @ ServiceError::RecordNotFound) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to retrieve doctor");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Failed to retrieve doctor" })),
            )
                .into_response()
        }
    }
}

/// PUT /doctores/{id} - Partially update a doctor
pub async fn update(
    State(pool): State<Pool>,
    Path(id): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let generic = || {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Failed to update doctor" })),
        )
            .into_response()
    };

    let Ok(id) = id.parse::<i64>() else {
        return generic();
    };
    let updates: DoctorUpdate = match super::parse_body(body) {
        Ok(updates) => updates,
        Err(_) => return generic(),
    };

    match service(pool).update_doctor(id, updates).await {
        Ok(doctor) => (StatusCode::OK, Json(doctor)).into_response(),
        Err(error @ (ServiceError::RecordNotFound | ServiceError::Update)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to update doctor");
            generic()
        }
    }
}

/// DELETE /doctores/{id} - Delete a doctor
pub async fn delete(State(pool): State<Pool>, Path(id): Path<String>) -> Response {
    let generic = || {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Failed to delete doctor" })),
        )
            .into_response()
    };

    let Ok(id) = id.parse::<i64>() else {
        return generic();
    };

    match service(pool).delete_doctor(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Doctor was deleted successfully" })),
        )
            .into_response(),
        Err(error @ ServiceError::Delete) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to delete doctor");
            generic()
        }
    }
}
