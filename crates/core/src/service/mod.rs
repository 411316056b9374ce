//! Per-entity business logic sitting between the HTTP handlers and the
//! repositories. Services own the existence checks, the partial-update
//! merge, the appointment/doctor composition, and the translation of
//! repository outcomes into the error taxonomy.

mod appointment;
mod doctor;
mod patient;

pub use appointment::AppointmentService;
pub use doctor::DoctorService;
pub use patient::PatientService;

#[cfg(test)]
pub(crate) mod testing;
