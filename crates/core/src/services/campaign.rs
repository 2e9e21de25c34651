//! Campaign service.

use chrono::Utc;
use menuboard_common::{AppResult, ImageFolder, StorageService};
use menuboard_db::{entities::campaign, repositories::CampaignRepository};
use sea_orm::Set;
use validator::Validate;

use super::image::{ImageUpload, discard_image, discard_images, store_optional_image};

/// Input for creating a campaign.
#[derive(Debug, Clone, Validate)]
pub struct CreateCampaignInput {
    #[validate(length(min = 1, message = "Title EN must be provided"))]
    pub title_en: String,

    #[validate(length(min = 1, message = "Title AZ must be provided"))]
    pub title_az: String,

    #[validate(length(min = 1, message = "Text EN must be provided"))]
    pub text_en: String,

    #[validate(length(min = 1, message = "Text AZ must be provided"))]
    pub text_az: String,
}

/// Input for updating a campaign. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateCampaignInput {
    #[validate(length(min = 1, message = "Title EN must be provided"))]
    pub title_en: Option<String>,

    #[validate(length(min = 1, message = "Title AZ must be provided"))]
    pub title_az: Option<String>,

    #[validate(length(min = 1, message = "Text EN must be provided"))]
    pub text_en: Option<String>,

    #[validate(length(min = 1, message = "Text AZ must be provided"))]
    pub text_az: Option<String>,
}

/// Campaign service for business logic.
#[derive(Clone)]
pub struct CampaignService {
    campaign_repo: CampaignRepository,
    storage: StorageService,
}

impl CampaignService {
    /// Create a new campaign service.
    #[must_use]
    pub const fn new(campaign_repo: CampaignRepository, storage: StorageService) -> Self {
        Self {
            campaign_repo,
            storage,
        }
    }

    /// All campaigns in creation order.
    pub async fn list(&self) -> AppResult<Vec<campaign::Model>> {
        self.campaign_repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> AppResult<campaign::Model> {
        self.campaign_repo.get_by_id(id).await
    }

    /// Create a campaign with an optional image.
    pub async fn create(
        &self,
        input: CreateCampaignInput,
        image: Option<ImageUpload>,
    ) -> AppResult<campaign::Model> {
        input.validate()?;

        let image_url =
            store_optional_image(&self.storage, ImageFolder::Campaigns, image.as_ref()).await?;

        let now = Utc::now();
        let model = campaign::ActiveModel {
            title_en: Set(input.title_en),
            title_az: Set(input.title_az),
            text_en: Set(input.text_en),
            text_az: Set(input.text_az),
            image: Set(image_url.clone()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        match self.campaign_repo.create(model).await {
            Ok(campaign) => {
                tracing::info!(campaign_id = campaign.id, "Created campaign");
                Ok(campaign)
            }
            Err(e) => {
                discard_images(&self.storage, [image_url.as_deref()]).await;
                Err(e)
            }
        }
    }

    /// Update a campaign, replacing its image when a new one is given.
    pub async fn update(
        &self,
        id: i32,
        input: UpdateCampaignInput,
        image: Option<ImageUpload>,
    ) -> AppResult<campaign::Model> {
        input.validate()?;

        let existing = self.campaign_repo.get_by_id(id).await?;

        let new_image =
            store_optional_image(&self.storage, ImageFolder::Campaigns, image.as_ref()).await?;

        let old_image = existing.image.clone();
        let mut model: campaign::ActiveModel = existing.into();

        if let Some(title_en) = input.title_en {
            model.title_en = Set(title_en);
        }
        if let Some(title_az) = input.title_az {
            model.title_az = Set(title_az);
        }
        if let Some(text_en) = input.text_en {
            model.text_en = Set(text_en);
        }
        if let Some(text_az) = input.text_az {
            model.text_az = Set(text_az);
        }
        if new_image.is_some() {
            model.image = Set(new_image.clone());
        }
        model.updated_at = Set(Utc::now().into());

        match self.campaign_repo.update(model).await {
            Ok(campaign) => {
                if new_image.is_some() {
                    discard_images(&self.storage, [old_image.as_deref()]).await;
                }
                tracing::info!(campaign_id = id, "Updated campaign");
                Ok(campaign)
            }
            Err(e) => {
                discard_images(&self.storage, [new_image.as_deref()]).await;
                Err(e)
            }
        }
    }

    /// Delete a campaign and its image.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let campaign = self.campaign_repo.get_by_id(id).await?;

        if let Some(url) = &campaign.image {
            discard_image(&self.storage, url).await;
        }

        self.campaign_repo.delete(id).await?;
        tracing::info!(campaign_id = id, "Deleted campaign");

        Ok(())
    }
}
