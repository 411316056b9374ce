mod appointment;
mod doctor;
mod patient;

pub use appointment::PgAppointmentRepository;
pub use doctor::PgDoctorRepository;
pub use patient::PgPatientRepository;

use citas_core::RepositoryError;
use deadpool_postgres::{Config, Pool, Runtime};
use tokio_postgres::NoTls;

/// Create a connection pool from a database URL
pub fn create_pool(database_url: &str) -> Result<Pool, deadpool_postgres::CreatePoolError> {
    let mut cfg = Config::new();
    cfg.url = Some(database_url.to_string());
    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
}

/// Collapse a driver error into the storage-boundary error type.
pub(crate) fn db_err(error: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::Database(error.to_string())
}
