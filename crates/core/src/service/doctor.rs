use crate::error::ServiceError;
use crate::model::{Doctor, DoctorReq, DoctorUpdate};
use crate::repository::DoctorRepository;

/// Doctor business logic; same pipeline shape as the patient service.
pub struct DoctorService<R> {
    repository: R,
}

impl<R: DoctorRepository> DoctorService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn get_all_doctors(&self) -> Result<Vec<Doctor>, ServiceError> {
        self.repository.get_all().await.map_err(|error| {
            tracing::error!(%error, "Failed getting all doctors from service");
            ServiceError::GetAll("Failed getting all doctors from service".into())
        })
    }

    pub async fn create_doctor(&self, req: DoctorReq) -> Result<Doctor, ServiceError> {
        self.repository.create(&req).await.map_err(|error| {
            tracing::error!(%error, "Failed to create doctor from service");
            ServiceError::Creation("Failed to create doctor from service".into())
        })
    }

    pub async fn get_doctor_by_id(&self, id: i64) -> Result<Doctor, ServiceError> {
        match self.repository.get_by_id(id).await {
            Ok(Some(doctor)) => Ok(doctor),
            Ok(None) => Err(ServiceError::RecordNotFound),
            Err(error) => {
                tracing::error!(%error, "Failed to get doctor from service");
                Err(ServiceError::RecordNotFound)
            }
        }
    }

    pub async fn update_doctor(
        &self,
        id: i64,
        updates: DoctorUpdate,
    ) -> Result<Doctor, ServiceError> {
        let existing = match self.repository.get_by_id(id).await {
            Ok(Some(doctor)) => doctor,
            Ok(None) | Err(_) => {
                tracing::error!("Failed to update doctor from service");
                return Err(ServiceError::Update);
            }
        };

        let updated = updates.apply(existing);
        match self.repository.update(id, &updated).await {
            Ok(()) => Ok(updated),
            Err(error) => {
                tracing::error!(%error, "Failed to update doctor from service");
                Err(ServiceError::Update)
            }
        }
    }

    pub async fn delete_doctor(&self, id: i64) -> Result<(), ServiceError> {
        match self.repository.get_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => {
                tracing::error!("Failed to delete doctor from service");
                return Err(ServiceError::Delete);
            }
        }

        self.repository.delete(id).await.map_err(|error| {
            tracing::error!(%error, "Failed to delete doctor from service");
            ServiceError::Delete
        })
    }
}
