//! Business logic services.

#![allow(missing_docs)]

pub mod auth;
pub mod campaign;
pub mod category;
pub mod image;
pub mod info;
pub mod product;
pub mod sub_category;
pub mod token;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{AuthService, CredentialsInput, LoginOutput, hash_password, verify_password};
pub use campaign::{CampaignService, CreateCampaignInput, UpdateCampaignInput};
pub use category::{CategoryService, CategoryWithSubCategories, CreateCategoryInput, UpdateCategoryInput};
pub use image::{ImageUpload, discard_image};
pub use info::{InfoImages, InfoService, UpdateInfoInput};
pub use product::{CreateProductInput, ProductDetail, ProductService, UpdateProductInput};
pub use sub_category::{
    CreateSubCategoryInput, SubCategoryDetail, SubCategoryService, UpdateSubCategoryInput,
};
pub use token::{Claims, TokenIssuer};
