use async_trait::async_trait;
use citas_core::{Doctor, DoctorReq, DoctorRepository, RepositoryError};
use deadpool_postgres::Pool;
use tokio_postgres::Row;

use super::db_err;

/// PostgreSQL-backed doctor store over the `doctores` table.
#[derive(Clone)]
pub struct PgDoctorRepository {
    pool: Pool,
}

impl PgDoctorRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DoctorRepository for PgDoctorRepository {
    async fn get_all(&self) -> Result<Vec<Doctor>, RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        let rows = client
            .query(
                "SELECT id_doctor, nombre, apellido, especialidad, consultorio \
                 FROM doctores ORDER BY id_doctor",
                &[],
            )
            .await
            .map_err(db_err)?;
        Ok(rows.iter().map(doctor_from_row).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Doctor>, RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        let row = client
            .query_opt(
                "SELECT id_doctor, nombre, apellido, especialidad, consultorio \
                 FROM doctores WHERE id_doctor = $1",
                &[&id],
            )
            .await
            .map_err(db_err)?;
        Ok(row.as_ref().map(doctor_from_row))
    }

    async fn create(&self, req: &DoctorReq) -> Result<Doctor, RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        let row = client
            .query_one(
                "INSERT INTO doctores (nombre, apellido, especialidad, consultorio) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING id_doctor, nombre, apellido, especialidad, consultorio",
                &[
                    &req.nombre,
                    &req.apellido,
                    &req.especialidad,
                    &req.consultorio,
                ],
            )
            .await
            .map_err(db_err)?;
        Ok(doctor_from_row(&row))
    }

    async fn update(&self, id: i64, doctor: &Doctor) -> Result<(), RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        client
            .execute(
                "UPDATE doctores SET nombre = $1, apellido = $2, especialidad = $3, \
                 consultorio = $4 WHERE id_doctor = $5",
                &[
                    &doctor.nombre,
                    &doctor.apellido,
                    &doctor.especialidad,
                    &doctor.consultorio,
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
            .execute("DELETE FROM doctores WHERE id_doctor = $1", &[&id])
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

fn doctor_from_row(row: &Row) -> Doctor {
    Doctor {
        id_doctor: row.get("id_doctor"),
        nombre: row.get("nombre"),
        apellido: row.get("apellido"),
        especialidad: row.get("especialidad"),
        consultorio: row.get("consultorio"),
    }
}
