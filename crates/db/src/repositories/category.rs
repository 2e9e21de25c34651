//! Category repository.

use std::sync::Arc;

use crate::{
    entities::{Category, SubCategory, category, sub_category},
    error::classify,
};
use menuboard_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder,
};

const ENTITY: &str = "Category";

/// Category repository for database operations.
#[derive(Clone)]
pub struct CategoryRepository {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepository {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a category by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<category::Model>> {
        Category::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Get a category by ID, failing with `NotFound` if absent.
    pub async fn get_by_id(&self, id: i32) -> AppResult<category::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// All categories in display order.
    pub async fn find_all(&self) -> AppResult<Vec<category::Model>> {
        Category::find()
            .order_by_asc(category::Column::Position)
            .order_by_asc(category::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Categories that already use any of the given titles or position.
    ///
    /// `exclude_id` leaves the category being updated out of the check.
    pub async fn find_conflicting(
        &self,
        title_en: &str,
        title_az: &str,
        position: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<Vec<category::Model>> {
        let mut query = Category::find().filter(
            Condition::any()
                .add(category::Column::TitleEn.eq(title_en))
                .add(category::Column::TitleAz.eq(title_az))
                .add(category::Column::Position.eq(position)),
        );

        if let Some(id) = exclude_id {
            query = query.filter(category::Column::Id.ne(id));
        }

        query
            .all(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Load the subcategories of each category, ordered by position.
    pub async fn load_sub_categories(
        &self,
        categories: &[category::Model],
    ) -> AppResult<Vec<Vec<sub_category::Model>>> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        categories
            .load_many(
                SubCategory::find().order_by_asc(sub_category::Column::Position),
                self.db.as_ref(),
            )
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Create a new category.
    pub async fn create(&self, model: category::ActiveModel) -> AppResult<category::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Update a category.
    pub async fn update(&self, model: category::ActiveModel) -> AppResult<category::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))
    }

    /// Delete a category. Subcategories and their products go with it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = Category::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| classify(ENTITY, e))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        Ok(())
    }
}
