//! Product service.

use chrono::Utc;
use menuboard_common::{AppError, AppResult, ImageFolder, StorageService};
use menuboard_db::{
    entities::{category, product, sub_category},
    repositories::{ProductRepository, SubCategoryRepository},
};
use sea_orm::{Set, prelude::Json};
use validator::Validate;

use super::image::{ImageUpload, discard_image, discard_images, store_optional_image};

/// Input for creating a product.
#[derive(Debug, Clone, Validate)]
pub struct CreateProductInput {
    #[validate(length(min = 1, message = "Title EN must be provided"))]
    pub title_en: String,

    #[validate(length(min = 1, message = "Title AZ must be provided"))]
    pub title_az: String,

    #[validate(length(min = 1, message = "Description EN must be provided"))]
    pub desc_en: String,

    #[validate(length(min = 1, message = "Description AZ must be provided"))]
    pub desc_az: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[validate(length(min = 1, message = "Gram must be provided"))]
    pub gram: String,

    pub is_combo: bool,

    pub ingridients_en: Vec<String>,

    pub ingridients_az: Vec<String>,

    pub position: Option<i32>,

    pub sub_category_id: i32,
}

/// Input for updating a product. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateProductInput {
    #[validate(length(min = 1, message = "Title EN must be provided"))]
    pub title_en: Option<String>,

    #[validate(length(min = 1, message = "Title AZ must be provided"))]
    pub title_az: Option<String>,

    #[validate(length(min = 1, message = "Description EN must be provided"))]
    pub desc_en: Option<String>,

    #[validate(length(min = 1, message = "Description AZ must be provided"))]
    pub desc_az: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    #[validate(length(min = 1, message = "Gram must be provided"))]
    pub gram: Option<String>,

    pub is_combo: Option<bool>,

    pub ingridients_en: Option<Vec<String>>,

    pub ingridients_az: Option<Vec<String>>,

    pub position: Option<i32>,

    pub sub_category_id: Option<i32>,
}

/// A product with its subcategory and that subcategory's category.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: product::Model,
    pub sub_category: Option<sub_category::Model>,
    pub category: Option<category::Model>,
}

/// Product service for business logic.
#[derive(Clone)]
pub struct ProductService {
    product_repo: ProductRepository,
    sub_category_repo: SubCategoryRepository,
    storage: StorageService,
}

impl ProductService {
    /// Create a new product service.
    #[must_use]
    pub const fn new(
        product_repo: ProductRepository,
        sub_category_repo: SubCategoryRepository,
        storage: StorageService,
    ) -> Self {
        Self {
            product_repo,
            sub_category_repo,
            storage,
        }
    }

    /// All products by position; products without one come last.
    pub async fn list(&self) -> AppResult<Vec<ProductDetail>> {
        let products = self.product_repo.find_all().await?;
        self.with_relations(products).await
    }

    /// A single product with its subcategory and category.
    pub async fn get(&self, id: i32) -> AppResult<ProductDetail> {
        let product = self.product_repo.get_by_id(id).await?;
        self.with_relations(vec![product])
            .await?
            .pop()
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    async fn with_relations(&self, products: Vec<product::Model>) -> AppResult<Vec<ProductDetail>> {
        let sub_categories = self.product_repo.load_sub_categories(&products).await?;

        let loaded: Vec<sub_category::Model> = sub_categories.iter().flatten().cloned().collect();
        let categories = self.sub_category_repo.load_categories(&loaded).await?;
        let category_of = |sub: &sub_category::Model| {
            loaded
                .iter()
                .position(|s| s.id == sub.id)
                .and_then(|i| categories.get(i).cloned().flatten())
        };

        Ok(products
            .into_iter()
            .zip(sub_categories)
            .map(|(product, sub_category)| ProductDetail {
                category: sub_category.as_ref().and_then(category_of),
                product,
                sub_category,
            })
            .collect())
    }

    /// Create a product under an existing subcategory.
    pub async fn create(
        &self,
        input: CreateProductInput,
        image: Option<ImageUpload>,
    ) -> AppResult<product::Model> {
        input.validate()?;

        self.sub_category_repo
            .get_by_id(input.sub_category_id)
            .await?;

        let image_url =
            store_optional_image(&self.storage, ImageFolder::Products, image.as_ref()).await?;

        let now = Utc::now();
        let model = product::ActiveModel {
            title_en: Set(input.title_en),
            title_az: Set(input.title_az),
            desc_en: Set(input.desc_en),
            desc_az: Set(input.desc_az),
            price: Set(input.price),
            gram: Set(input.gram),
            is_combo: Set(input.is_combo),
            ingridients_en: Set(Json::from(input.ingridients_en)),
            ingridients_az: Set(Json::from(input.ingridients_az)),
            image: Set(image_url.clone()),
            position: Set(input.position),
            sub_category_id: Set(input.sub_category_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        match self.product_repo.create(model).await {
            Ok(product) => {
                tracing::info!(
                    product_id = product.id,
                    sub_category_id = product.sub_category_id,
                    "Created product"
                );
                Ok(product)
            }
            Err(e) => {
                discard_images(&self.storage, [image_url.as_deref()]).await;
                Err(e)
            }
        }
    }

    /// Update a product, replacing its image when a new one is given.
    pub async fn update(
        &self,
        id: i32,
        input: UpdateProductInput,
        image: Option<ImageUpload>,
    ) -> AppResult<product::Model> {
        input.validate()?;

        let existing = self.product_repo.get_by_id(id).await?;

        if let Some(sub_category_id) = input.sub_category_id {
            if sub_category_id != existing.sub_category_id {
                self.sub_category_repo.get_by_id(sub_category_id).await?;
            }
        }

        let new_image =
            store_optional_image(&self.storage, ImageFolder::Products, image.as_ref()).await?;

        let old_image = existing.image.clone();
        let mut model: product::ActiveModel = existing.into();

        if let Some(title_en) = input.title_en {
            model.title_en = Set(title_en);
        }
        if let Some(title_az) = input.title_az {
            model.title_az = Set(title_az);
        }
        if let Some(desc_en) = input.desc_en {
            model.desc_en = Set(desc_en);
        }
        if let Some(desc_az) = input.desc_az {
            model.desc_az = Set(desc_az);
        }
        if let Some(price) = input.price {
            model.price = Set(price);
        }
        if let Some(gram) = input.gram {
            model.gram = Set(gram);
        }
        if let Some(is_combo) = input.is_combo {
            model.is_combo = Set(is_combo);
        }
        if let Some(ingridients) = input.ingridients_en {
            model.ingridients_en = Set(Json::from(ingridients));
        }
        if let Some(ingridients) = input.ingridients_az {
            model.ingridients_az = Set(Json::from(ingridients));
        }
        if let Some(position) = input.position {
            model.position = Set(Some(position));
        }
        if let Some(sub_category_id) = input.sub_category_id {
            model.sub_category_id = Set(sub_category_id);
        }
        if new_image.is_some() {
            model.image = Set(new_image.clone());
        }
        model.updated_at = Set(Utc::now().into());

        match self.product_repo.update(model).await {
            Ok(product) => {
                if new_image.is_some() {
                    discard_images(&self.storage, [old_image.as_deref()]).await;
                }
                tracing::info!(product_id = id, "Updated product");
                Ok(product)
            }
            Err(e) => {
                discard_images(&self.storage, [new_image.as_deref()]).await;
                Err(e)
            }
        }
    }

    /// Delete a product and its image.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let product = self.product_repo.get_by_id(id).await?;

        if let Some(url) = &product.image {
            discard_image(&self.storage, url).await;
        }

        self.product_repo.delete(id).await?;
        tracing::info!(product_id = id, "Deleted product");

        Ok(())
    }
}
