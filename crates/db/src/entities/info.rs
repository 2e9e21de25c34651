//! Site info entity.
//!
//! A single row (id = 1) seeded by migration; the API only reads and updates it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    /// Logo image URL.
    #[sea_orm(nullable)]
    pub logo: Option<String>,

    /// Background image URL.
    #[sea_orm(nullable)]
    pub background_image: Option<String>,

    pub title_en: String,

    pub title_az: String,

    /// Contact phone numbers (JSON array of strings).
    pub phone_numbers: Json,

    pub email: String,

    pub address_en: String,

    pub address_az: String,

    pub instagram: String,

    pub facebook: String,

    pub whatsapp: String,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
