//! Spare-parts service

use crate::{
    error::AppResult,
    models::part::{CreatePart, Part, UpdatePart},
    repository::Repository,
};

#[derive(Clone)]
pub struct PartsService {
    repository: Repository,
}

impl PartsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Part>> {
        self.repository.parts.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Part> {
        self.repository.parts.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreatePart) -> AppResult<i64> {
        self.repository.parts.create(data).await
    }

    pub async fn update(&self, id: i64, data: &UpdatePart) -> AppResult<()> {
        self.repository.parts.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.parts.delete(id).await
    }
}
