//! Appointment HTTP handlers. Creation and single-record reads return the
//! doctor-composed view; update returns the stored shape.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use deadpool_postgres::Pool;
use serde_json::{Value as JsonValue, json};

use citas_core::{AppointmentReq, AppointmentService, AppointmentUpdate, ServiceError};

use crate::db::{PgAppointmentRepository, PgDoctorRepository};

fn service(pool: Pool) -> AppointmentService<PgAppointmentRepository, PgDoctorRepository> {
    AppointmentService::new(
        PgAppointmentRepository::new(pool.clone()),
        PgDoctorRepository::new(pool),
    )
}

/// GET /citas - List all appointments
pub async fn list(State(pool): State<Pool>) -> Response {
    match service(pool).get_all_appointments().await {
        Ok(appointments) => (StatusCode::OK, Json(appointments)).into_response(),
        Err(error) => {
            tracing::error!(%error, "Error getting all appointments");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Error getting all appointments" })),
            )
                .into_response()
        }
    }
}

/// POST /citas - Create an appointment
pub async fn create(
    State(pool): State<Pool>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let req: AppointmentReq = match super::parse_body(body) {
        Ok(req) => req,
        Err(error) => {
            tracing::error!(%error, "Malformed appointment create request");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Internal Server Error" })),
            )
                .into_response();
        }
    };

    match service(pool).create_appointment(req).await {
        Ok(appointment) => (StatusCode::CREATED, Json(appointment)).into_response(),
        Err(error @ ServiceError::Creation(_)) => {
            tracing::error!(%error, "Failed creating appointment");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error_name": error.name(),
                    "message": "Failed Creating appointment"
                })),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!(%error, "Failed creating appointment");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Internal Server Error" })),
            )
                .into_response()
        }
    }
}

/// GET /citas/{id} - Get an appointment by id
pub async fn get_by_id(State(pool): State<Pool>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Failed to retrieve appointment" })),
        )
            .into_response();
    };

    match service(pool).get_appointment_by_id(id).await {
        Ok(appointment) => (StatusCode::OK, Json(appointment)).into_response(),
        Err(error @ ServiceError::RecordNotFound) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to retrieve appointment");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Failed to retrieve appointment" })),
            )
                .into_response()
        }
    }
}

/// PUT /citas/{id} - Partially update an appointment
pub async fn update(
    State(pool): State<Pool>,
    Path(id): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let generic = || {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Failed to update appointment" })),
        )
            .into_response()
    };

    let Ok(id) = id.parse::<i64>() else {
        return generic();
    };
    let updates: AppointmentUpdate = match super::parse_body(body) {
        Ok(updates) => updates,
        Err(_) => return generic(),
    };

    match service(pool).update_appointment(id, updates).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error @ (ServiceError::RecordNotFound | ServiceError::Update)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to update appointment");
            generic()
        }
    }
}

/// DELETE /citas/{id} - Delete an appointment
pub async fn delete(State(pool): State<Pool>, Path(id): Path<String>) -> Response {
    let generic = || {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Failed to delete appointment" })),
        )
            .into_response()
    };

    let Ok(id) = id.parse::<i64>() else {
        return generic();
    };

    match service(pool).delete_appointment(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Appointment was deleted successfully" })),
        )
            .into_response(),
        Err(error @ ServiceError::Delete) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to delete appointment");
            generic()
        }
    }
}
