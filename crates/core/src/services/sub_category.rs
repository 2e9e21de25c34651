//! Subcategory service.

use chrono::Utc;
use menuboard_common::{AppError, AppResult, StorageService};
use menuboard_db::{
    entities::{category, product, sub_category},
    repositories::{CategoryRepository, ProductRepository, SubCategoryRepository},
};
use sea_orm::Set;
use validator::Validate;

use super::image::discard_images;

/// Input for creating a subcategory.
#[derive(Debug, Clone, Validate)]
pub struct CreateSubCategoryInput {
    #[validate(length(min = 1, message = "Title EN must be provided"))]
    pub title_en: String,

    #[validate(length(min = 1, message = "Title AZ must be provided"))]
    pub title_az: String,

    pub position: i32,

    pub category_id: i32,
}

/// Input for updating a subcategory. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateSubCategoryInput {
    #[validate(length(min = 1, message = "Title EN must be provided"))]
    pub title_en: Option<String>,

    #[validate(length(min = 1, message = "Title AZ must be provided"))]
    pub title_az: Option<String>,

    pub position: Option<i32>,

    pub category_id: Option<i32>,
}

/// A subcategory with its parent category and products.
#[derive(Debug, Clone, PartialEq)]
pub struct SubCategoryDetail {
    pub sub_category: sub_category::Model,
    pub category: Option<category::Model>,
    pub products: Vec<product::Model>,
}

/// Subcategory service for business logic.
#[derive(Clone)]
pub struct SubCategoryService {
    sub_category_repo: SubCategoryRepository,
    category_repo: CategoryRepository,
    product_repo: ProductRepository,
    storage: StorageService,
}

impl SubCategoryService {
    /// Create a new subcategory service.
    #[must_use]
    pub const fn new(
        sub_category_repo: SubCategoryRepository,
        category_repo: CategoryRepository,
        product_repo: ProductRepository,
        storage: StorageService,
    ) -> Self {
        Self {
            sub_category_repo,
            category_repo,
            product_repo,
            storage,
        }
    }

    /// All subcategories by position.
    pub async fn list(&self) -> AppResult<Vec<SubCategoryDetail>> {
        let sub_categories = self.sub_category_repo.find_all().await?;
        self.with_relations(sub_categories).await
    }

    /// A single subcategory with its category and products.
    pub async fn get(&self, id: i32) -> AppResult<SubCategoryDetail> {
        let sub_category = self.sub_category_repo.get_by_id(id).await?;
        self.with_relations(vec![sub_category])
            .await?
            .pop()
            .ok_or_else(|| AppError::NotFound("Subcategory not found".to_string()))
    }

    async fn with_relations(
        &self,
        sub_categories: Vec<sub_category::Model>,
    ) -> AppResult<Vec<SubCategoryDetail>> {
        let categories = self
            .sub_category_repo
            .load_categories(&sub_categories)
            .await?;
        let products = self.sub_category_repo.load_products(&sub_categories).await?;

        Ok(sub_categories
            .into_iter()
            .zip(categories)
            .zip(products)
            .map(|((sub_category, category), products)| SubCategoryDetail {
                sub_category,
                category,
                products,
            })
            .collect())
    }

    /// Create a subcategory under an existing category.
    pub async fn create(&self, input: CreateSubCategoryInput) -> AppResult<sub_category::Model> {
        input.validate()?;

        self.category_repo.get_by_id(input.category_id).await?;
        self.ensure_position_free(input.category_id, input.position, None)
            .await?;

        let now = Utc::now();
        let model = sub_category::ActiveModel {
            title_en: Set(input.title_en),
            title_az: Set(input.title_az),
            position: Set(input.position),
            category_id: Set(input.category_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let sub_category = self.sub_category_repo.create(model).await?;
        tracing::info!(
            sub_category_id = sub_category.id,
            category_id = sub_category.category_id,
            "Created subcategory"
        );

        Ok(sub_category)
    }

    /// Update a subcategory.
    pub async fn update(
        &self,
        id: i32,
        input: UpdateSubCategoryInput,
    ) -> AppResult<sub_category::Model> {
        input.validate()?;

        let existing = self.sub_category_repo.get_by_id(id).await?;

        let category_id = input.category_id.unwrap_or(existing.category_id);
        if category_id != existing.category_id {
            self.category_repo.get_by_id(category_id).await?;
        }

        let position = input.position.unwrap_or(existing.position);
        if category_id != existing.category_id || position != existing.position {
            self.ensure_position_free(category_id, position, Some(id))
                .await?;
        }

        let mut model: sub_category::ActiveModel = existing.into();

        if let Some(title_en) = input.title_en {
            model.title_en = Set(title_en);
        }
        if let Some(title_az) = input.title_az {
            model.title_az = Set(title_az);
        }
        model.position = Set(position);
        model.category_id = Set(category_id);
        model.updated_at = Set(Utc::now().into());

        let sub_category = self.sub_category_repo.update(model).await?;
        tracing::info!(sub_category_id = id, "Updated subcategory");

        Ok(sub_category)
    }

    /// Delete a subcategory and its products, removing product images first.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.sub_category_repo.get_by_id(id).await?;

        let products = self.product_repo.find_with_image_in(&[id]).await?;
        let images: Vec<Option<&str>> = products.iter().map(|p| p.image.as_deref()).collect();
        discard_images(&self.storage, images).await;

        self.sub_category_repo.delete(id).await?;
        tracing::info!(sub_category_id = id, products = products.len(), "Deleted subcategory");

        Ok(())
    }

    async fn ensure_position_free(
        &self,
        category_id: i32,
        position: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<()> {
        if self
            .sub_category_repo
            .find_by_position(category_id, position, exclude_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Subcategory with this position already exists in this category".to_string(),
            ));
        }

        Ok(())
    }
}
