//! API response types.
//!
//! Field names follow the dashboard's wire format (`titleEN`, `subCategoryId`, ...).

use chrono::{DateTime, FixedOffset};
use menuboard_core::{CategoryWithSubCategories, ProductDetail, SubCategoryDetail};
use menuboard_db::entities::{campaign, category, info, product, sub_category};
use serde::Serialize;
use serde_json::Value;

/// Acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Category response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    #[serde(rename = "titleEN")]
    pub title_en: String,
    #[serde(rename = "titleAZ")]
    pub title_az: String,
    pub image: String,
    pub position: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_categories: Option<Vec<SubCategoryResponse>>,
}

impl From<category::Model> for CategoryResponse {
    fn from(category: category::Model) -> Self {
        Self {
            id: category.id,
            title_en: category.title_en,
            title_az: category.title_az,
            image: category.image,
            position: category.position,
            created_at: category.created_at,
            updated_at: category.updated_at,
            sub_categories: None,
        }
    }
}

impl From<CategoryWithSubCategories> for CategoryResponse {
    fn from(detail: CategoryWithSubCategories) -> Self {
        Self {
            sub_categories: Some(
                detail
                    .sub_categories
                    .into_iter()
                    .map(SubCategoryResponse::from)
                    .collect(),
            ),
            ..Self::from(detail.category)
        }
    }
}

/// Subcategory response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryResponse {
    pub id: i32,
    #[serde(rename = "titleEN")]
    pub title_en: String,
    #[serde(rename = "titleAZ")]
    pub title_az: String,
    pub position: i32,
    pub category_id: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductResponse>>,
}

impl From<sub_category::Model> for SubCategoryResponse {
    fn from(sub: sub_category::Model) -> Self {
        Self {
            id: sub.id,
            title_en: sub.title_en,
            title_az: sub.title_az,
            position: sub.position,
            category_id: sub.category_id,
            created_at: sub.created_at,
            updated_at: sub.updated_at,
            category: None,
            products: None,
        }
    }
}

impl From<SubCategoryDetail> for SubCategoryResponse {
    fn from(detail: SubCategoryDetail) -> Self {
        Self {
            category: detail.category.map(CategoryResponse::from),
            products: Some(
                detail
                    .products
                    .into_iter()
                    .map(ProductResponse::from)
                    .collect(),
            ),
            ..Self::from(detail.sub_category)
        }
    }
}

/// Product response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    #[serde(rename = "titleEN")]
    pub title_en: String,
    #[serde(rename = "titleAZ")]
    pub title_az: String,
    #[serde(rename = "descEN")]
    pub desc_en: String,
    #[serde(rename = "descAZ")]
    pub desc_az: String,
    pub price: f64,
    pub gram: String,
    pub is_combo: bool,
    #[serde(rename = "ingridientsEN")]
    pub ingridients_en: Value,
    #[serde(rename = "ingridientsAZ")]
    pub ingridients_az: Value,
    pub image: Option<String>,
    pub position: Option<i32>,
    pub sub_category_id: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<SubCategoryResponse>,
}

impl From<product::Model> for ProductResponse {
    fn from(product: product::Model) -> Self {
        Self {
            id: product.id,
            title_en: product.title_en,
            title_az: product.title_az,
            desc_en: product.desc_en,
            desc_az: product.desc_az,
            price: product.price,
            gram: product.gram,
            is_combo: product.is_combo,
            ingridients_en: product.ingridients_en,
            ingridients_az: product.ingridients_az,
            image: product.image,
            position: product.position,
            sub_category_id: product.sub_category_id,
            created_at: product.created_at,
            updated_at: product.updated_at,
            sub_category: None,
        }
    }
}

impl From<ProductDetail> for ProductResponse {
    fn from(detail: ProductDetail) -> Self {
        let category = detail.category.map(CategoryResponse::from);
        let sub_category = detail.sub_category.map(|sub| SubCategoryResponse {
            category,
            ..SubCategoryResponse::from(sub)
        });

        Self {
            sub_category,
            ..Self::from(detail.product)
        }
    }
}

/// Campaign response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    pub id: i32,
    #[serde(rename = "titleEN")]
    pub title_en: String,
    #[serde(rename = "titleAZ")]
    pub title_az: String,
    #[serde(rename = "textEN")]
    pub text_en: String,
    #[serde(rename = "textAZ")]
    pub text_az: String,
    pub image: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<campaign::Model> for CampaignResponse {
    fn from(campaign: campaign::Model) -> Self {
        Self {
            id: campaign.id,
            title_en: campaign.title_en,
            title_az: campaign.title_az,
            text_en: campaign.text_en,
            text_az: campaign.text_az,
            image: campaign.image,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

/// Site info response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub id: i32,
    pub logo: Option<String>,
    pub background_image: Option<String>,
    #[serde(rename = "titleEN")]
    pub title_en: String,
    #[serde(rename = "titleAZ")]
    pub title_az: String,
    pub phone_numbers: Value,
    pub email: String,
    #[serde(rename = "addressEN")]
    pub address_en: String,
    #[serde(rename = "addressAZ")]
    pub address_az: String,
    pub instagram: String,
    pub facebook: String,
    pub whatsapp: String,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<info::Model> for InfoResponse {
    fn from(info: info::Model) -> Self {
        Self {
            id: info.id,
            logo: info.logo,
            background_image: info.background_image,
            title_en: info.title_en,
            title_az: info.title_az,
            phone_numbers: info.phone_numbers,
            email: info.email,
            address_en: info.address_en,
            address_az: info.address_az,
            instagram: info.instagram,
            facebook: info.facebook,
            whatsapp: info.whatsapp,
            updated_at: info.updated_at,
        }
    }
}
