//! Entity models. Field names are the wire contract and stay in the domain
//! language of the upstream system (Spanish identifiers).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted patient. Identity and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id_paciente: i64,
    pub nombre: String,
    pub apellido: String,
    pub identificacion: String,
    pub telefono: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Writable patient fields, as sent on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientReq {
    pub nombre: String,
    pub apellido: String,
    pub identificacion: String,
    pub telefono: i64,
}

/// Partial patient update: absent fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientUpdate {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub identificacion: Option<String>,
    pub telefono: Option<i64>,
}

impl PatientUpdate {
    /// Merge onto an existing record, field by field.
    pub fn apply(self, mut existing: Patient) -> Patient {
        if let Some(nombre) = self.nombre {
            existing.nombre = nombre;
        }
        if let Some(apellido) = self.apellido {
            existing.apellido = apellido;
        }
        if let Some(identificacion) = self.identificacion {
            existing.identificacion = identificacion;
        }
        if let Some(telefono) = self.telefono {
            existing.telefono = telefono;
        }
        existing
    }
}

/// A persisted doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id_doctor: i64,
    pub nombre: String,
    pub apellido: String,
    pub especialidad: String,
    pub consultorio: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorReq {
    pub nombre: String,
    pub apellido: String,
    pub especialidad: String,
    pub consultorio: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorUpdate {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub especialidad: Option<String>,
    pub consultorio: Option<i64>,
}

impl DoctorUpdate {
    pub fn apply(self, mut existing: Doctor) -> Doctor {
        if let Some(nombre) = self.nombre {
            existing.nombre = nombre;
        }
        if let Some(apellido) = self.apellido {
            existing.apellido = apellido;
        }
        if let Some(especialidad) = self.especialidad {
            existing.especialidad = especialidad;
        }
        if let Some(consultorio) = self.consultorio {
            existing.consultorio = consultorio;
        }
        existing
    }
}

/// An appointment as stored: references its doctor by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id_cita: i64,
    pub identificacion_paciente: String,
    pub especialidad: String,
    pub horario: String,
    pub id_doctor: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentReq {
    pub identificacion_paciente: String,
    pub especialidad: String,
    pub horario: String,
    pub id_doctor: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentUpdate {
    pub identificacion_paciente: Option<String>,
    pub especialidad: Option<String>,
    pub horario: Option<String>,
    pub id_doctor: Option<i64>,
}

impl AppointmentUpdate {
    pub fn apply(self, mut existing: AppointmentRecord) -> AppointmentRecord {
        if let Some(identificacion_paciente) = self.identificacion_paciente {
            existing.identificacion_paciente = identificacion_paciente;
        }
        if let Some(especialidad) = self.especialidad {
            existing.especialidad = especialidad;
        }
        if let Some(horario) = self.horario {
            existing.horario = horario;
        }
        if let Some(id_doctor) = self.id_doctor {
            existing.id_doctor = id_doctor;
        }
        existing
    }
}

/// The presented appointment: a read-oriented view with the doctor's display
/// name and office in place of the raw foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub identificacion_paciente: String,
    pub especialidad: String,
    pub doctor: String,
    pub consultorio: i64,
    pub horario: String,
}
