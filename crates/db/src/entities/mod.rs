//! Database entities.

#![allow(missing_docs)]

pub mod campaign;
pub mod category;
pub mod info;
pub mod product;
pub mod sub_category;
pub mod user;

pub use campaign::Entity as Campaign;
pub use category::Entity as Category;
pub use info::Entity as Info;
pub use product::Entity as Product;
pub use sub_category::Entity as SubCategory;
pub use user::Entity as User;
