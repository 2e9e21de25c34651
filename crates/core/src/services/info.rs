//! Site info service.
//!
//! The info record is a single row that is only ever read and updated.

use chrono::Utc;
use menuboard_common::{AppError, AppResult, ImageFolder, StorageService};
use menuboard_db::{entities::info, repositories::InfoRepository};
use sea_orm::{Set, prelude::Json};
use validator::{Validate, ValidateEmail};

use super::image::{ImageUpload, discard_images, store_optional_image};

/// Input for updating the site info. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateInfoInput {
    #[validate(length(min = 1, message = "Title EN must be provided"))]
    pub title_en: Option<String>,

    #[validate(length(min = 1, message = "Title AZ must be provided"))]
    pub title_az: Option<String>,

    pub phone_numbers: Option<Vec<String>>,

    /// Contact email. An empty string clears it.
    pub email: Option<String>,

    pub address_en: Option<String>,

    pub address_az: Option<String>,

    pub instagram: Option<String>,

    pub facebook: Option<String>,

    pub whatsapp: Option<String>,
}

impl UpdateInfoInput {
    fn check(&self) -> AppResult<()> {
        self.validate()?;

        if let Some(email) = &self.email {
            if !email.is_empty() && !email.validate_email() {
                return Err(AppError::Validation("Invalid email format".to_string()));
            }
        }

        Ok(())
    }
}

/// New images for the info record.
#[derive(Debug, Clone, Default)]
pub struct InfoImages {
    pub logo: Option<ImageUpload>,
    pub background_image: Option<ImageUpload>,
}

/// Site info service.
#[derive(Clone)]
pub struct InfoService {
    info_repo: InfoRepository,
    storage: StorageService,
}

impl InfoService {
    /// Create a new info service.
    #[must_use]
    pub const fn new(info_repo: InfoRepository, storage: StorageService) -> Self {
        Self { info_repo, storage }
    }

    pub async fn get(&self) -> AppResult<info::Model> {
        self.info_repo.get().await
    }

    /// Update the info record, replacing the logo and background image when given.
    pub async fn update(
        &self,
        input: UpdateInfoInput,
        images: InfoImages,
    ) -> AppResult<info::Model> {
        input.check()?;

        let existing = self.info_repo.get().await?;

        let logo =
            store_optional_image(&self.storage, ImageFolder::Info, images.logo.as_ref()).await?;
        let background_image = match store_optional_image(
            &self.storage,
            ImageFolder::Info,
            images.background_image.as_ref(),
        )
        .await
        {
            Ok(url) => url,
            Err(e) => {
                discard_images(&self.storage, [logo.as_deref()]).await;
                return Err(e);
            }
        };

        let old_logo = existing.logo.clone();
        let old_background = existing.background_image.clone();
        let mut model: info::ActiveModel = existing.into();

        if let Some(title_en) = input.title_en {
            model.title_en = Set(title_en);
        }
        if let Some(title_az) = input.title_az {
            model.title_az = Set(title_az);
        }
        if let Some(phone_numbers) = input.phone_numbers {
            model.phone_numbers = Set(Json::from(phone_numbers));
        }
        if let Some(email) = input.email {
            model.email = Set(email);
        }
        if let Some(address_en) = input.address_en {
            model.address_en = Set(address_en);
        }
        if let Some(address_az) = input.address_az {
            model.address_az = Set(address_az);
        }
        if let Some(instagram) = input.instagram {
            model.instagram = Set(instagram);
        }
        if let Some(facebook) = input.facebook {
            model.facebook = Set(facebook);
        }
        if let Some(whatsapp) = input.whatsapp {
            model.whatsapp = Set(whatsapp);
        }
        if logo.is_some() {
            model.logo = Set(logo.clone());
        }
        if background_image.is_some() {
            model.background_image = Set(background_image.clone());
        }
        model.updated_at = Set(Utc::now().into());

        match self.info_repo.update(model).await {
            Ok(info) => {
                let replaced_logo = logo.is_some().then_some(old_logo).flatten();
                let replaced_background = background_image
                    .is_some()
                    .then_some(old_background)
                    .flatten();
                discard_images(
                    &self.storage,
                    [replaced_logo.as_deref(), replaced_background.as_deref()],
                )
                .await;

                tracing::info!("Updated site info");
                Ok(info)
            }
            Err(e) => {
                discard_images(&self.storage, [logo.as_deref(), background_image.as_deref()])
                    .await;
                Err(e)
            }
        }
    }
}
