use async_trait::async_trait;
use citas_core::{Patient, PatientReq, PatientRepository, RepositoryError};
use deadpool_postgres::Pool;
use tokio_postgres::Row;

use super::db_err;

/// PostgreSQL-backed patient store over the `pacientes` table.
#[derive(Clone)]
pub struct PgPatientRepository {
    pool: Pool,
}

impl PgPatientRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatientRepository for PgPatientRepository {
    async fn get_all(&self) -> Result<Vec<Patient>, RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        let rows = client
            .query(
                "SELECT id_paciente, nombre, apellido, identificacion, telefono, \
                 created_at, updated_at FROM pacientes ORDER BY id_paciente",
                &[],
            )
            .await
            .map_err(db_err)?;
        Ok(rows.iter().map(patient_from_row).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Patient>, RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        let row = client
            .query_opt(
                "SELECT id_paciente, nombre, apellido, identificacion, telefono, \
                 created_at, updated_at FROM pacientes WHERE id_paciente = $1",
                &[&id],
            )
            .await
            .map_err(db_err)?;
        Ok(row.as_ref().map(patient_from_row))
    }

    async fn create(&self, req: &PatientReq) -> Result<Patient, RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        let row = client
            .query_one(
                "INSERT INTO pacientes (nombre, apellido, identificacion, telefono) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING id_paciente, nombre, apellido, identificacion, telefono, \
                 created_at, updated_at",
                &[&req.nombre, &req.apellido, &req.identificacion, &req.telefono],
            )
            .await
            .map_err(db_err)?;
        Ok(patient_from_row(&row))
    }

    async fn update(&self, id: i64, patient: &Patient) -> Result<(), RepositoryError> {
        let client = self.pool.get().await.map_err(db_err)?;
        client
            .execute(
                "UPDATE pacientes SET nombre = $1, apellido = $2, identificacion = $3, \
                 telefono = $4, updated_at = now() WHERE id_paciente = $5",
                &[
                    &patient.nombre,
                    &patient.apellido,
                    &patient.identificacion,
                    &patient.telefono,
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
            .execute("DELETE FROM pacientes WHERE id_paciente = $1", &[&id])
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

fn patient_from_row(row: &Row) -> Patient {
    Patient {
        id_paciente: row.get("id_paciente"),
        nombre: row.get("nombre"),
        apellido: row.get("apellido"),
        identificacion: row.get("identificacion"),
        telefono: row.get("telefono"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
