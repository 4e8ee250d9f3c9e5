//! Equipment repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, EquipmentDetails, UpdateEquipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Sqlite>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all equipment joined with owning client details.
    /// Equipment without a registered client still lists, with null
    /// client fields.
    pub async fn list(&self) -> AppResult<Vec<EquipmentDetails>> {
        let rows = sqlx::query_as::<_, EquipmentDetails>(
            r#"
            SELECT
                e.id, e.name, e.model, e.serial_number, e.location,
                e.client_id, e.installation_date, e.last_service,
                e.next_service, e.status,
                c.name AS client_name,
                c.contact_person,
                c.phone
            FROM equipment e
            LEFT JOIN clients c ON e.client_id = c.id
            ORDER BY e.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create equipment, returning the new identity
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO equipment
                (name, model, serial_number, location, client_id,
                 installation_date, last_service, next_service, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.name)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(&data.location)
        .bind(data.client_id)
        .bind(data.installation_date)
        .bind(data.last_service)
        .bind(data.next_service)
        .bind(data.status.as_deref().unwrap_or("active"))
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Update equipment (every column rewritten)
    pub async fn update(&self, id: i64, data: &UpdateEquipment) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE equipment SET
                name = ?, model = ?, serial_number = ?, location = ?,
                client_id = ?, installation_date = ?, last_service = ?,
                next_service = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.name)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(&data.location)
        .bind(data.client_id)
        .bind(data.installation_date)
        .bind(data.last_service)
        .bind(data.next_service)
        .bind(data.status.as_deref().unwrap_or("active"))
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Delete equipment. Dependent maintenance records are not cascaded.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }
}
