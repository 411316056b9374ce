//! Persistence boundary. One trait per entity; implementations live in the
//! server crate and receive their database handle at construction.

use async_trait::async_trait;

use crate::error::RepositoryError;
use crate::model::{
    Appointment, AppointmentRecord, AppointmentReq, Doctor, DoctorReq, Patient, PatientReq,
};

#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Patient>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Patient>, RepositoryError>;
    async fn create(&self, req: &PatientReq) -> Result<Patient, RepositoryError>;
    async fn update(&self, id: i64, patient: &Patient) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait DoctorRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Doctor>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Doctor>, RepositoryError>;
    async fn create(&self, req: &DoctorReq) -> Result<Doctor, RepositoryError>;
    async fn update(&self, id: i64, doctor: &Doctor) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

/// Appointment persistence. Listing returns the presented form (the store
/// joins in the doctor); single-record reads return the stored shape.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Appointment>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<AppointmentRecord>, RepositoryError>;
    async fn create(&self, req: &AppointmentReq) -> Result<AppointmentRecord, RepositoryError>;
    async fn update(&self, id: i64, record: &AppointmentRecord) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
