//! Subcategory repository.

use std::sync::Arc;

use crate::{
    entities::{Category, Product, SubCategory, category, product, sub_category},
    error::classify,
};
use menuboard_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder,
};

const ENTITY: &str = "Subcategory";

/// Subcategory repository for database operations.
#[derive(Clone)]
pub struct SubCategoryRepository {
    db: Arc<DatabaseConnection>,
}

impl SubCategoryRepository {
    /// Create a new subcategory repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a subcategory by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<sub_category::Model>> {
        SubCategory::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Get a subcategory by ID, failing with `NotFound` if absent.
    pub async fn get_by_id(&self, id: i32) -> AppResult<sub_category::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Subcategory not found".to_string()))
    }

    /// All subcategories in display order.
    pub async fn find_all(&self) -> AppResult<Vec<sub_category::Model>> {
        SubCategory::find()
            .order_by_asc(sub_category::Column::Position)
            .order_by_asc(sub_category::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Subcategories belonging to a category.
    pub async fn find_by_category(&self, category_id: i32) -> AppResult<Vec<sub_category::Model>> {
        SubCategory::find()
            .filter(sub_category::Column::CategoryId.eq(category_id))
            .order_by_asc(sub_category::Column::Position)
            .all(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// The subcategory occupying `position` within a category, if any.
    ///
    /// `exclude_id` leaves the subcategory being updated out of the check.
    pub async fn find_by_position(
        &self,
        category_id: i32,
        position: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<sub_category::Model>> {
        let mut query = SubCategory::find()
            .filter(sub_category::Column::CategoryId.eq(category_id))
            .filter(sub_category::Column::Position.eq(position));

        if let Some(id) = exclude_id {
            query = query.filter(sub_category::Column::Id.ne(id));
        }

        query
            .one(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Load the parent category of each subcategory.
    pub async fn load_categories(
        &self,
        sub_categories: &[sub_category::Model],
    ) -> AppResult<Vec<Option<category::Model>>> {
        if sub_categories.is_empty() {
            return Ok(Vec::new());
        }

        sub_categories
            .load_one(Category, self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Load the products of each subcategory in display order.
    pub async fn load_products(
        &self,
        sub_categories: &[sub_category::Model],
    ) -> AppResult<Vec<Vec<product::Model>>> {
        if sub_categories.is_empty() {
            return Ok(Vec::new());
        }

        sub_categories
            .load_many(
                Product::find()
                    .order_by_asc(product::Column::Position)
                    .order_by_asc(product::Column::Id),
                self.db.as_ref(),
            )
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Create a new subcategory.
    pub async fn create(&self, model: sub_category::ActiveModel) -> AppResult<sub_category::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Update a subcategory.
    pub async fn update(&self, model: sub_category::ActiveModel) -> AppResult<sub_category::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Delete a subcategory. Its products go with it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = SubCategory::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Subcategory not found".to_string()));
        }

        Ok(())
    }
}
