use crate::error::ServiceError;
use crate::model::{Patient, PatientReq, PatientUpdate};
use crate::repository::PatientRepository;

/// Patient business logic over an injected repository.
pub struct PatientService<R> {
    repository: R,
}

impl<R: PatientRepository> PatientService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Listing is the one method that passes repository failures through
    /// untranslated.
    pub async fn get_all_patients(&self) -> Result<Vec<Patient>, ServiceError> {
        Ok(self.repository.get_all().await?)
    }

    pub async fn create_patient(&self, req: PatientReq) -> Result<Patient, ServiceError> {
        self.repository.create(&req).await.map_err(|error| {
            tracing::error!(%error, "Failed to create patient from service");
            ServiceError::Creation("Failed to create patient from service".into())
        })
    }

    pub async fn get_patient_by_id(&self, id: i64) -> Result<Patient, ServiceError> {
        match self.repository.get_by_id(id).await {
            Ok(Some(patient)) => Ok(patient),
            Ok(None) => Err(ServiceError::RecordNotFound),
            Err(error) => {
                tracing::error!(%error, "Failed to get patient from service");
                Err(ServiceError::RecordNotFound)
            }
        }
    }

    /// Read-merge-write. Every failure on this path, including the record
    /// being absent, surfaces as the update kind.
    pub async fn update_patient(
        &self,
        id: i64,
        updates: PatientUpdate,
    ) -> Result<Patient, ServiceError> {
        let existing = match self.repository.get_by_id(id).await {
            Ok(Some(patient)) => patient,
            Ok(None) | Err(_) => {
                tracing::error!("Failed to update paciente from service");
                return Err(ServiceError::Update);
            }
        };

        let updated = updates.apply(existing);
        match self.repository.update(id, &updated).await {
            Ok(()) => Ok(updated),
            Err(error) => {
                tracing::error!(%error, "Failed to update paciente from service");
                Err(ServiceError::Update)
            }
        }
    }

    /// Existence check, then physical delete. Absence surfaces as the
    /// delete kind, like any other failure here.
    pub async fn delete_patient(&self, id: i64) -> Result<(), ServiceError> {
        match self.repository.get_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => {
                tracing::error!("Failed to delete paciente from service");
                return Err(ServiceError::Delete);
            }
        }

        self.repository.delete(id).await.map_err(|error| {
            tracing::error!(%error, "Failed to delete paciente from service");
            ServiceError::Delete
        })
    }
}
