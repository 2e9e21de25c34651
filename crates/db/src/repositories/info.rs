//! Site info repository.

use std::sync::Arc;

use crate::{
    entities::{Info, info},
    error::classify,
};
use menuboard_common::{AppError, AppResult};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

/// Primary key of the single info row.
pub const INFO_ID: i32 = 1;

/// Site info repository for database operations.
#[derive(Clone)]
pub struct InfoRepository {
    db: Arc<DatabaseConnection>,
}

impl InfoRepository {
    /// Create a new info repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Get the info record.
    pub async fn get(&self) -> AppResult<info::Model> {
        Info::find_by_id(INFO_ID)
            .one(self.db.as_ref())
            .await
            .map_err(|e| classify("Info", e))?
            .ok_or_else(|| AppError::NotFound("Info not found".to_string()))
    }

    /// Update the info record.
    pub async fn update(&self, model: info::ActiveModel) -> AppResult<info::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| classify("Info", e))
    }
}
