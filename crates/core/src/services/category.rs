//! Category service.

use chrono::Utc;
use menuboard_common::{AppError, AppResult, ImageFolder, StorageService};
use menuboard_db::{
    entities::{category, sub_category},
    repositories::{CategoryRepository, ProductRepository, SubCategoryRepository},
};
use sea_orm::Set;
use validator::Validate;

use super::image::{
    ImageUpload, discard_image, discard_images, store_image, store_optional_image,
};

/// Input for creating a category.
#[derive(Debug, Clone, Validate)]
pub struct CreateCategoryInput {
    #[validate(length(min = 1, message = "Title EN must be provided"))]
    pub title_en: String,

    #[validate(length(min = 1, message = "Title AZ must be provided"))]
    pub title_az: String,

    pub position: i32,
}

/// Input for updating a category. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateCategoryInput {
    #[validate(length(min = 1, message = "Title EN must be provided"))]
    pub title_en: Option<String>,

    #[validate(length(min = 1, message = "Title AZ must be provided"))]
    pub title_az: Option<String>,

    pub position: Option<i32>,
}

/// A category together with its subcategories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWithSubCategories {
    pub category: category::Model,
    pub sub_categories: Vec<sub_category::Model>,
}

/// Category service for business logic.
#[derive(Clone)]
pub struct CategoryService {
    category_repo: CategoryRepository,
    sub_category_repo: SubCategoryRepository,
    product_repo: ProductRepository,
    storage: StorageService,
}

impl CategoryService {
    /// Create a new category service.
    #[must_use]
    pub const fn new(
        category_repo: CategoryRepository,
        sub_category_repo: SubCategoryRepository,
        product_repo: ProductRepository,
        storage: StorageService,
    ) -> Self {
        Self {
            category_repo,
            sub_category_repo,
            product_repo,
            storage,
        }
    }

    /// All categories by position, each with its subcategories.
    pub async fn list(&self) -> AppResult<Vec<CategoryWithSubCategories>> {
        let categories = self.category_repo.find_all().await?;
        let sub_categories = self.category_repo.load_sub_categories(&categories).await?;

        Ok(categories
            .into_iter()
            .zip(sub_categories)
            .map(|(category, sub_categories)| CategoryWithSubCategories {
                category,
                sub_categories,
            })
            .collect())
    }

    /// A single category with its subcategories.
    pub async fn get(&self, id: i32) -> AppResult<CategoryWithSubCategories> {
        let category = self.category_repo.get_by_id(id).await?;
        let sub_categories = self
            .category_repo
            .load_sub_categories(std::slice::from_ref(&category))
            .await?
            .pop()
            .unwrap_or_default();

        Ok(CategoryWithSubCategories {
            category,
            sub_categories,
        })
    }

    /// Create a category. The image is required.
    pub async fn create(
        &self,
        input: CreateCategoryInput,
        image: Option<ImageUpload>,
    ) -> AppResult<category::Model> {
        input.validate()?;

        let Some(image) = image else {
            return Err(AppError::Validation("Image must be provided".to_string()));
        };

        self.ensure_unique(&input.title_en, &input.title_az, input.position, None)
            .await?;

        let image_url = store_image(&self.storage, ImageFolder::Categories, &image).await?;

        let now = Utc::now();
        let model = category::ActiveModel {
            title_en: Set(input.title_en),
            title_az: Set(input.title_az),
            image: Set(image_url.clone()),
            position: Set(input.position),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        match self.category_repo.create(model).await {
            Ok(category) => {
                tracing::info!(category_id = category.id, "Created category");
                Ok(category)
            }
            Err(e) => {
                discard_image(&self.storage, &image_url).await;
                Err(e)
            }
        }
    }

    /// Update a category, replacing its image when a new one is given.
    pub async fn update(
        &self,
        id: i32,
        input: UpdateCategoryInput,
        image: Option<ImageUpload>,
    ) -> AppResult<category::Model> {
        input.validate()?;

        let existing = self.category_repo.get_by_id(id).await?;

        self.ensure_unique(
            input.title_en.as_deref().unwrap_or(&existing.title_en),
            input.title_az.as_deref().unwrap_or(&existing.title_az),
            input.position.unwrap_or(existing.position),
            Some(id),
        )
        .await?;

        let new_image =
            store_optional_image(&self.storage, ImageFolder::Categories, image.as_ref()).await?;

        let old_image = existing.image.clone();
        let mut model: category::ActiveModel = existing.into();

        if let Some(title_en) = input.title_en {
            model.title_en = Set(title_en);
        }
        if let Some(title_az) = input.title_az {
            model.title_az = Set(title_az);
        }
        if let Some(position) = input.position {
            model.position = Set(position);
        }
        if let Some(url) = &new_image {
            model.image = Set(url.clone());
        }
        model.updated_at = Set(Utc::now().into());

        match self.category_repo.update(model).await {
            Ok(category) => {
                if new_image.is_some() {
                    discard_image(&self.storage, &old_image).await;
                }
                tracing::info!(category_id = id, "Updated category");
                Ok(category)
            }
            Err(e) => {
                discard_images(&self.storage, [new_image.as_deref()]).await;
                Err(e)
            }
        }
    }

    /// Delete a category with its subcategories and products.
    ///
    /// Image files of every product underneath are removed first.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let category = self.category_repo.get_by_id(id).await?;

        let sub_category_ids: Vec<i32> = self
            .sub_category_repo
            .find_by_category(id)
            .await?
            .iter()
            .map(|s| s.id)
            .collect();
        let products = self
            .product_repo
            .find_with_image_in(&sub_category_ids)
            .await?;

        let images: Vec<Option<&str>> = products.iter().map(|p| p.image.as_deref()).collect();
        discard_images(&self.storage, images).await;
        discard_image(&self.storage, &category.image).await;

        self.category_repo.delete(id).await?;
        tracing::info!(
            category_id = id,
            sub_categories = sub_category_ids.len(),
            "Deleted category"
        );

        Ok(())
    }

    /// Reject titles or position already used by another category.
    async fn ensure_unique(
        &self,
        title_en: &str,
        title_az: &str,
        position: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<()> {
        let conflicts = self
            .category_repo
            .find_conflicting(title_en, title_az, position, exclude_id)
            .await?;

        if conflicts.iter().any(|c| c.position == position) {
            return Err(AppError::Conflict(
                "Category with this position already exists".to_string(),
            ));
        }
        if !conflicts.is_empty() {
            return Err(AppError::Conflict(
                "Category with this title already exists".to_string(),
            ));
        }

        Ok(())
    }
}
