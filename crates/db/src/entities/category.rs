//! Menu category entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Top-level menu category (e.g. "Drinks").
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// English title (globally unique).
    #[sea_orm(unique)]
    pub title_en: String,

    /// Azerbaijani title (globally unique).
    #[sea_orm(unique)]
    pub title_az: String,

    /// Public image URL.
    pub image: String,

    /// Manual display-ordering key (globally unique).
    #[sea_orm(unique)]
    pub position: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sub_category::Entity")]
    SubCategories,
}

impl Related<super::sub_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
