//! Product entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title_en: String,

    pub title_az: String,

    #[sea_orm(column_type = "Text")]
    pub desc_en: String,

    #[sea_orm(column_type = "Text")]
    pub desc_az: String,

    #[sea_orm(column_type = "Double")]
    pub price: f64,

    /// Portion size as entered by the admin (e.g. "250 g").
    pub gram: String,

    #[sea_orm(default_value = false)]
    pub is_combo: bool,

    /// Ingredient names (JSON array of strings).
    pub ingridients_en: Json,

    /// Ingredient names (JSON array of strings).
    pub ingridients_az: Json,

    /// Public image URL.
    #[sea_orm(nullable)]
    pub image: Option<String>,

    /// Display-ordering key; not unique.
    #[sea_orm(nullable)]
    pub position: Option<i32>,

    #[sea_orm(indexed)]
    pub sub_category_id: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sub_category::Entity",
        from = "Column::SubCategoryId",
        to = "super::sub_category::Column::Id",
        on_delete = "Cascade"
    )]
    SubCategory,
}

impl Related<super::sub_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
