//! Database repositories.

mod campaign;
mod category;
mod info;
mod product;
mod sub_category;
mod user;

pub use campaign::CampaignRepository;
pub use category::CategoryRepository;
pub use info::{INFO_ID, InfoRepository};
pub use product::ProductRepository;
pub use sub_category::SubCategoryRepository;
pub use user::UserRepository;
