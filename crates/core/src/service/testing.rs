//! In-memory repository doubles for the service tests. Each one can be
//! switched into a failing state to exercise the error translation paths.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::error::RepositoryError;
use crate::model::{
    Appointment, AppointmentRecord, AppointmentReq, Doctor, DoctorReq, Patient, PatientReq,
};
use crate::repository::{AppointmentRepository, DoctorRepository, PatientRepository};

pub fn sample_patient(id: i64) -> Patient {
    Patient {
        id_paciente: id,
        nombre: "Andres".into(),
        apellido: "Cruz".into(),
        identificacion: "155555550".into(),
        telefono: 222222,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn sample_doctor(id: i64) -> Doctor {
    Doctor {
        id_doctor: id,
        nombre: "Gregory".into(),
        apellido: "House".into(),
        especialidad: "Medicina general".into(),
        consultorio: 101,
    }
}

pub fn sample_record(id: i64, id_doctor: i64) -> AppointmentRecord {
    AppointmentRecord {
        id_cita: id,
        identificacion_paciente: "155555550".into(),
        especialidad: "Medicina general".into(),
        horario: "7:30-8:30".into(),
        id_doctor,
    }
}

#[derive(Default)]
pub struct InMemoryPatients {
    rows: Mutex<BTreeMap<i64, Patient>>,
    next_id: AtomicI64,
    failing: AtomicBool,
}

impl InMemoryPatients {
    pub fn with(patients: Vec<Patient>) -> Self {
        let repo = Self::default();
        let mut rows = repo.rows.lock().unwrap();
        for patient in patients {
            repo.next_id
                .fetch_max(patient.id_paciente, Ordering::SeqCst);
            rows.insert(patient.id_paciente, patient);
        }
        drop(rows);
        repo
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(RepositoryError::Database("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatients {
    async fn get_all(&self) -> Result<Vec<Patient>, RepositoryError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Patient>, RepositoryError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, req: &PatientReq) -> Result<Patient, RepositoryError> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let patient = Patient {
            id_paciente: id,
            nombre: req.nombre.clone(),
            apellido: req.apellido.clone(),
            identificacion: req.identificacion.clone(),
            telefono: req.telefono,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().insert(id, patient.clone());
        Ok(patient)
    }

    async fn update(&self, id: i64, patient: &Patient) -> Result<(), RepositoryError> {
        self.check()?;
        self.rows.lock().unwrap().insert(id, patient.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.check()?;
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryDoctors {
    rows: Mutex<BTreeMap<i64, Doctor>>,
    next_id: AtomicI64,
    failing: AtomicBool,
}

impl InMemoryDoctors {
    pub fn with(doctors: Vec<Doctor>) -> Self {
        let repo = Self::default();
        let mut rows = repo.rows.lock().unwrap();
        for doctor in doctors {
            repo.next_id.fetch_max(doctor.id_doctor, Ordering::SeqCst);
            rows.insert(doctor.id_doctor, doctor);
        }
        drop(rows);
        repo
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(RepositoryError::Database("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctors {
    async fn get_all(&self) -> Result<Vec<Doctor>, RepositoryError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Doctor>, RepositoryError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, req: &DoctorReq) -> Result<Doctor, RepositoryError> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let doctor = Doctor {
            id_doctor: id,
            nombre: req.nombre.clone(),
            apellido: req.apellido.clone(),
            especialidad: req.especialidad.clone(),
            consultorio: req.consultorio,
        };
        self.rows.lock().unwrap().insert(id, doctor.clone());
        Ok(doctor)
    }

    async fn update(&self, id: i64, doctor: &Doctor) -> Result<(), RepositoryError> {
        self.check()?;
        self.rows.lock().unwrap().insert(id, doctor.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.check()?;
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAppointments {
    rows: Mutex<BTreeMap<i64, AppointmentRecord>>,
    next_id: AtomicI64,
    failing: AtomicBool,
}

impl InMemoryAppointments {
    pub fn with(records: Vec<AppointmentRecord>) -> Self {
        let repo = Self::default();
        let mut rows = repo.rows.lock().unwrap();
        for record in records {
            repo.next_id.fetch_max(record.id_cita, Ordering::SeqCst);
            rows.insert(record.id_cita, record);
        }
        drop(rows);
        repo
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn rows(&self) -> Vec<AppointmentRecord> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(RepositoryError::Database("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointments {
    // The real store joins in the doctor; the double settles for a canned
    // display name since list tests only exercise the error path.
    async fn get_all(&self) -> Result<Vec<Appointment>, RepositoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .map(|record| Appointment {
                identificacion_paciente: record.identificacion_paciente.clone(),
                especialidad: record.especialidad.clone(),
                doctor: "Gregory House".into(),
                consultorio: 101,
                horario: record.horario.clone(),
            })
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<AppointmentRecord>, RepositoryError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, req: &AppointmentReq) -> Result<AppointmentRecord, RepositoryError> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = AppointmentRecord {
            id_cita: id,
            identificacion_paciente: req.identificacion_paciente.clone(),
            especialidad: req.especialidad.clone(),
            horario: req.horario.clone(),
            id_doctor: req.id_doctor,
        };
        self.rows.lock().unwrap().insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, record: &AppointmentRecord) -> Result<(), RepositoryError> {
        self.check()?;
        self.rows.lock().unwrap().insert(id, record.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.check()?;
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }
}
