//! citas-core: Domain types and business logic for the appointment backend
//!
//! This crate provides the entity models, the error taxonomy, the repository
//! traits that form the persistence boundary, and the per-entity services.
//! It knows nothing about HTTP or SQL; those live in `citas-server`.

pub mod error;
pub mod model;
pub mod repository;
pub mod service;

pub use error::{RepositoryError, ServiceError};
pub use model::{
    Appointment, AppointmentRecord, AppointmentReq, AppointmentUpdate, Doctor, DoctorReq,
    DoctorUpdate, Patient, PatientReq, PatientUpdate,
};
pub use repository::{AppointmentRepository, DoctorRepository, PatientRepository};
pub use service::{AppointmentService, DoctorService, PatientService};
