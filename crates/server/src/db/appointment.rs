use async_trait::async_trait;
use citas_core::{
    Appointment, AppointmentRecord, AppointmentReq, AppointmentRepository, RepositoryError,
};
use deadpool_postgres::Pool;
use tokio_postgres::Row;

use super::db_err;

/// PostgreSQL-backed appointment store over the `citas` table. Listing
/// joins `doctores` to produce the presented form directly.
#[derive(Clone)]
pub struct PgAppointmentRepository {
    pool: Pool,
}

impl PgAppointmentRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn get_all(&self) -> Result<Vec<Appointment>, RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        let rows = client
            .query(
                "SELECT c.identificacion_paciente, c.especialidad, \
                 d.nombre, d.apellido, d.consultorio, c.horario \
                 FROM citas c JOIN doctores d ON d.id_doctor = c.id_doctor \
                 ORDER BY c.id_cita",
                &[],
            )
            .await
            .map_err(db_err)?;
        Ok(rows
            .iter()
            .map(|row| Appointment {
                identificacion_paciente: row.get("identificacion_paciente"),
                especialidad: row.get("especialidad"),
                doctor: format!(
                    "{} {}",
                    row.get::<_, String>("nombre"),
                    row.get::<_, String>("apellido")
                ),
                consultorio: row.get("consultorio"),
                horario: row.get("horario"),
            })
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<AppointmentRecord>, RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        let row = client
            .query_opt(
                "SELECT id_cita, identificacion_paciente, especialidad, horario, id_doctor \
                 FROM citas WHERE id_cita = $1",
                &[&id],
            )
            .await
            .map_err(db_err)?;
        Ok(row.as_ref().map(record_from_row))
    }

    async fn create(&self, req: &AppointmentReq) -> Result<AppointmentRecord, RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        let row = client
            .query_one(
                "INSERT INTO citas (identificacion_paciente, especialidad, horario, id_doctor) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING id_cita, identificacion_paciente, especialidad, horario, id_doctor",
                &[
                    &req.identificacion_paciente,
                    &req.especialidad,
                    &req.horario,
                    &req.id_doctor,
                ],
            )
            .await
            .map_err(db_err)?;
        Ok(record_from_row(&row))
    }

    async fn update(&self, id: i64, record: &AppointmentRecord) -> Result<(), RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        client
            .execute(
                "UPDATE citas SET identificacion_paciente = $1, especialidad = $2, \
                 horario = $3, id_doctor = $4 WHERE id_cita = $5",
                &[
                    &record.identificacion_paciente,
                    &record.especialidad,
                    &record.horario,
                    &record.id_doctor,
                    &id,
                ],
            )
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        client
            .execute("DELETE FROM citas WHERE id_cita = $1", &[&id])
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

fn record_from_row(row: &Row) -> AppointmentRecord {
    AppointmentRecord {
        id_cita: row.get("id_cita"),
        identificacion_paciente: row.get("identificacion_paciente"),
        especialidad: row.get("especialidad"),
        horario: row.get("horario"),
        id_doctor: row.get("id_doctor"),
    }
}
