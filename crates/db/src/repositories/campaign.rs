//! Campaign repository.

use std::sync::Arc;

use crate::{
    entities::{Campaign, campaign},
    error::classify,
};
use menuboard_common::{AppError, AppResult};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

const ENTITY: &str = "Campaign";

/// Campaign repository for database operations.
#[derive(Clone)]
pub struct CampaignRepository {
    db: Arc<DatabaseConnection>,
}

impl CampaignRepository {
    /// Create a new campaign repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a campaign by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<campaign::Model>> {
        Campaign::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Get a campaign by ID, failing with `NotFound` if absent.
    pub async fn get_by_id(&self, id: i32) -> AppResult<campaign::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Campaign not found".to_string()))
    }

    /// All campaigns, oldest first.
    pub async fn find_all(&self) -> AppResult<Vec<campaign::Model>> {
        Campaign::find()
            .order_by_asc(campaign::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Create a new campaign.
    pub async fn create(&self, model: campaign::ActiveModel) -> AppResult<campaign::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Update a campaign.
    pub async fn update(&self, model: campaign::ActiveModel) -> AppResult<campaign::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Delete a campaign.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = Campaign::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Campaign not found".to_string()));
        }

        Ok(())
    }
}
