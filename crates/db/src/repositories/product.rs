//! Product repository.

use std::sync::Arc;

use crate::{
    entities::{Product, SubCategory, product, sub_category},
    error::classify,
};
use menuboard_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder,
};

const ENTITY: &str = "Product";

/// Product repository for database operations.
#[derive(Clone)]
pub struct ProductRepository {
    db: Arc<DatabaseConnection>,
}

impl ProductRepository {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a product by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<product::Model>> {
        Product::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Get a product by ID, failing with `NotFound` if absent.
    pub async fn get_by_id(&self, id: i32) -> AppResult<product::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// All products in display order. Products without a position come last.
    pub async fn find_all(&self) -> AppResult<Vec<product::Model>> {
        Product::find()
            .order_by_asc(product::Column::Position)
            .order_by_asc(product::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Products with an image under any of the given subcategories.
    pub async fn find_with_image_in(
        &self,
        sub_category_ids: &[i32],
    ) -> AppResult<Vec<product::Model>> {
        if sub_category_ids.is_empty() {
            return Ok(Vec::new());
        }

        Product::find()
            .filter(product::Column::SubCategoryId.is_in(sub_category_ids.iter().copied()))
            .filter(product::Column::Image.is_not_null())
            .all(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Load the subcategory of each product.
    pub async fn load_sub_categories(
        &self,
        products: &[product::Model],
    ) -> AppResult<Vec<Option<sub_category::Model>>> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        products
            .load_one(SubCategory, self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Create a new product.
    pub async fn create(&self, model: product::ActiveModel) -> AppResult<product::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Update a product.
    pub async fn update(&self, model: product::ActiveModel) -> AppResult<product::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Delete a product.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = Product::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        Ok(())
    }
}
