//! Spare-parts repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::part::{CreatePart, Part, UpdatePart},
};

#[derive(Clone)]
pub struct PartsRepository {
    pool: Pool<Sqlite>,
}

impl PartsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all parts
    pub async fn list(&self) -> AppResult<Vec<Part>> {
        let rows = sqlx::query_as::<_, Part>("SELECT * FROM parts ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get part by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Part> {
        sqlx::query_as::<_, Part>("SELECT * FROM parts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Part {} not found", id)))
    }

    /// Create a part, returning the new identity
    pub async fn create(&self, data: &CreatePart) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO parts
                (name, part_number, quantity, min_quantity, price, supplier, category)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.name)
        .bind(&data.part_number)
        .bind(data.quantity)
        .bind(data.min_quantity)
        .bind(data.price)
        .bind(&data.supplier)
        .bind(&data.category)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Update a part (every column rewritten)
    pub async fn update(&self, id: i64, data: &UpdatePart) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE parts SET
                name = ?, part_number = ?, quantity = ?, min_quantity = ?,
                price = ?, supplier = ?, category = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.name)
        .bind(&data.part_number)
        .bind(data.quantity)
        .bind(data.min_quantity)
        .bind(data.price)
        .bind(&data.supplier)
        .bind(&data.category)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Part {} not found", id)));
        }
        Ok(())
    }

    /// Delete a part
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM parts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Part {} not found", id)));
        }
        Ok(())
    }
}
