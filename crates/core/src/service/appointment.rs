use crate::error::ServiceError;
use crate::model::{Appointment, AppointmentRecord, AppointmentReq, AppointmentUpdate, Doctor};
use crate::repository::{AppointmentRepository, DoctorRepository};

/// Appointment business logic. Collaborates with the doctor repository to
/// build the presented view on create and on single-record reads.
pub struct AppointmentService<A, D> {
    appointments: A,
    doctors: D,
}

impl<A: AppointmentRepository, D: DoctorRepository> AppointmentService<A, D> {
    pub fn new(appointments: A, doctors: D) -> Self {
        Self {
            appointments,
            doctors,
        }
    }

    pub async fn get_all_appointments(&self) -> Result<Vec<Appointment>, ServiceError> {
        self.appointments.get_all().await.map_err(|error| {
            tracing::error!(%error, "Failed getting all appointments from service");
            ServiceError::GetAll("Failed getting all appointments from service".into())
        })
    }

    /// Resolve the referenced doctor, persist, then re-resolve the doctor to
    /// compose the presented view. There is no transaction around these
    /// steps: if the re-resolution fails the appointment stays persisted
    /// while the caller sees a creation failure.
    pub async fn create_appointment(
        &self,
        req: AppointmentReq,
    ) -> Result<Appointment, ServiceError> {
        match self.doctors.get_by_id(req.id_doctor).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(creation_failure(
                    "the doctor does not exist, appointment cannot be created",
                ));
            }
            Err(error) => return Err(creation_failure(&error.to_string())),
        }

        let record = match self.appointments.create(&req).await {
            Ok(record) => record,
            Err(error) => return Err(creation_failure(&error.to_string())),
        };

        match self.doctors.get_by_id(record.id_doctor).await {
            Ok(Some(doctor)) => Ok(present(&record, &doctor)),
            Ok(None) => Err(creation_failure(
                "the doctor does not exist, appointment cannot be created",
            )),
            Err(error) => Err(creation_failure(&error.to_string())),
        }
    }

    /// Every failure here collapses to the not-found kind, storage errors
    /// included.
    pub async fn get_appointment_by_id(&self, id: i64) -> Result<Appointment, ServiceError> {
        let record = match self.appointments.get_by_id(id).await {
            Ok(Some(record)) => record,
            Ok(None) | Err(_) => {
                tracing::error!("Failed to get appointment from service");
                return Err(ServiceError::RecordNotFound);
            }
        };

        match self.doctors.get_by_id(record.id_doctor).await {
            Ok(Some(doctor)) => Ok(present(&record, &doctor)),
            Ok(None) | Err(_) => {
                tracing::error!("Failed to get appointment from service");
                Err(ServiceError::RecordNotFound)
            }
        }
    }

    /// Returns the stored shape, not the doctor-composed view that create
    /// and get produce.
    pub async fn update_appointment(
        &self,
        id: i64,
        updates: AppointmentUpdate,
    ) -> Result<AppointmentRecord, ServiceError> {
        let existing = match self.appointments.get_by_id(id).await {
            Ok(Some(record)) => record,
            Ok(None) | Err(_) => {
                tracing::error!("Failed to update cita from service");
                return Err(ServiceError::Update);
            }
        };

        let updated = updates.apply(existing);
        match self.appointments.update(id, &updated).await {
            Ok(()) => Ok(updated),
            Err(error) => {
                tracing::error!(%error, "Failed to update cita from service");
                Err(ServiceError::Update)
            }
        }
    }

    pub async fn delete_appointment(&self, id: i64) -> Result<(), ServiceError> {
        match self.appointments.get_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => {
                tracing::error!("Failed to delete cita from service");
                return Err(ServiceError::Delete);
            }
        }

        self.appointments.delete(id).await.map_err(|error| {
            tracing::error!(%error, "Failed to delete cita from service");
            ServiceError::Delete
        })
    }
}

fn creation_failure(cause: &str) -> ServiceError {
    ServiceError::Creation(format!(
        "Failed to create appointment from service: {cause}"
    ))
}

fn present(record: &AppointmentRecord, doctor: &Doctor) -> Appointment {
    Appointment {
        identificacion_paciente: record.identificacion_paciente.clone(),
        especialidad: record.especialidad.clone(),
        doctor: format!("{} {}", doctor.nombre, doctor.apellido),
        consultorio: doctor.consultorio,
        horario: record.horario.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{
        InMemoryAppointments, InMemoryDoctors, sample_doctor, sample_record,
    };

    fn request(id_doctor: i64) -> AppointmentReq {
        AppointmentReq {
            identificacion_paciente: "155555550".into(),
            especialidad: "Medicina general".into(),
            horario: "7:30-8:30".into(),
            id_doctor,
        }
    }

    #[tokio::test]
    async fn create_composes_doctor_display_fields() {
        let doctors = InMemoryDoctors::with(vec![sample_doctor(1)]);
        let appointments = InMemoryAppointments::default();
        let service = AppointmentService::new(appointments, doctors);

        let appointment = service.create_appointment(request(1)).await.unwrap();
        assert_eq!(appointment.doctor, "Gregory House");
        assert_eq!(appointment.consultorio, sample_doctor(1).consultorio);
        assert_eq!(appointment.horario, "7:30-8:30");
    }

    #[tokio::test]
    async fn create_with_unknown_doctor_fails_and_persists_nothing() {
        let doctors = InMemoryDoctors::default();
        let appointments = InMemoryAppointments::default();
        let service = AppointmentService::new(appointments, doctors);

        let error = service.create_appointment(request(99)).await.unwrap_err();
        assert_eq!(error.name(), "CreationError");
        assert!(error.to_string().contains("the doctor does not exist"));
        assert!(service.appointments.rows().is_empty());
    }

    #[tokio::test]
    async fn create_with_failing_doctor_lookup_embeds_cause() {
        let doctors = InMemoryDoctors::with(vec![sample_doctor(1)]);
        doctors.fail();
        let appointments = InMemoryAppointments::default();
        let service = AppointmentService::new(appointments, doctors);

        let error = service.create_appointment(request(1)).await.unwrap_err();
        assert_eq!(error.name(), "CreationError");
        assert!(
            error
                .to_string()
                .starts_with("Failed to create appointment from service:")
        );
    }

    #[tokio::test]
    async fn get_by_id_composes_presented_form() {
        let doctors = InMemoryDoctors::with(vec![sample_doctor(3)]);
        let appointments = InMemoryAppointments::with(vec![sample_record(5, 3)]);
        let service = AppointmentService::new(appointments, doctors);

        let appointment = service.get_appointment_by_id(5).await.unwrap();
        assert_eq!(appointment.doctor, "Gregory House");
        assert_eq!(
            appointment.identificacion_paciente,
            sample_record(5, 3).identificacion_paciente
        );
    }

    #[tokio::test]
    async fn get_by_id_collapses_storage_failure_to_not_found() {
        let doctors = InMemoryDoctors::with(vec![sample_doctor(3)]);
        let appointments = InMemoryAppointments::with(vec![sample_record(5, 3)]);
        appointments.fail();
        let service = AppointmentService::new(appointments, doctors);

        let error = service.get_appointment_by_id(5).await.unwrap_err();
        assert_eq!(error.name(), "RecordNotFound");
    }

    #[tokio::test]
    async fn update_returns_stored_shape_with_merge_applied() {
        let doctors = InMemoryDoctors::with(vec![sample_doctor(3)]);
        let appointments = InMemoryAppointments::with(vec![sample_record(5, 3)]);
        let service = AppointmentService::new(appointments, doctors);
        let updates = AppointmentUpdate {
            horario: Some("9:00-10:00".into()),
            ..Default::default()
        };

        let record = service.update_appointment(5, updates).await.unwrap();
        assert_eq!(record.horario, "9:00-10:00");
        assert_eq!(record.id_doctor, 3);
        assert_eq!(
            record.identificacion_paciente,
            sample_record(5, 3).identificacion_paciente
        );
    }

    #[tokio::test]
    async fn update_absent_record_is_update_kind() {
        let service =
            AppointmentService::new(InMemoryAppointments::default(), InMemoryDoctors::default());

        let error = service
            .update_appointment(42, AppointmentUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(error.name(), "UpdateError");
    }

    #[tokio::test]
    async fn delete_then_get_is_record_not_found() {
        let doctors = InMemoryDoctors::with(vec![sample_doctor(3)]);
        let appointments = InMemoryAppointments::with(vec![sample_record(5, 3)]);
        let service = AppointmentService::new(appointments, doctors);

        service.delete_appointment(5).await.unwrap();
        let error = service.get_appointment_by_id(5).await.unwrap_err();
        assert_eq!(error.name(), "RecordNotFound");
    }

    #[tokio::test]
    async fn delete_absent_record_is_delete_kind() {
        let service =
            AppointmentService::new(InMemoryAppointments::default(), InMemoryDoctors::default());

        let error = service.delete_appointment(42).await.unwrap_err();
        assert_eq!(error.name(), "DeleteError");
    }
}
