//! Health check endpoint for the appointment database

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use deadpool_postgres::Pool;
use serde::Serialize;

/// Reported health of the backing `gestion_citas` store
#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl HealthStatus {
    fn healthy() -> Self {
        Self {
            status: "healthy",
            database: "gestion_citas",
            reason: None,
        }
    }

    fn unhealthy(reason: String) -> Self {
        Self {
            status: "unhealthy",
            database: "gestion_citas",
            reason: Some(reason),
        }
    }
}

/// GET /health - Check appointment-store connectivity
pub async fn check(State(pool): State<Pool>) -> impl IntoResponse {
    let client = match pool.get().await {
        Ok(client) => client,
        Err(error) => {
            tracing::error!(%error, "Health check could not reach the appointment database");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus::unhealthy(format!(
                    "Database connection failed: {error}"
                ))),
            );
        }
    };

    match client.query_one("SELECT 1", &[]).await {
        Ok(_) => (StatusCode::OK, Json(HealthStatus::healthy())),
        Err(error) => {
            tracing::error!(%error, "Health check query failed on the appointment database");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus::unhealthy(format!(
                    "Database query failed: {error}"
                ))),
            )
        }
    }
}
