//! Clients repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::client::{Client, CreateClient, UpdateClient},
};

#[derive(Clone)]
pub struct ClientsRepository {
    pool: Pool<Sqlite>,
}

impl ClientsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all clients
    pub async fn list(&self) -> AppResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get client by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Client> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))
    }

    /// Create a client, returning the new identity
    pub async fn create(&self, data: &CreateClient) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO clients (name, contact_person, phone, email, address)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.name)
        .bind(&data.contact_person)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.address)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Update a client (every column rewritten)
    pub async fn update(&self, id: i64, data: &UpdateClient) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE clients SET
                name = ?, contact_person = ?, phone = ?, email = ?, address = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.name)
        .bind(&data.contact_person)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.address)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Client {} not found", id)));
        }
        Ok(())
    }

    /// Delete a client. Owned equipment is not cascaded.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Client {} not found", id)));
        }
        Ok(())
    }
}
