//! Common utilities and shared types for menuboard.
//!
//! This crate provides foundational components used across all menuboard crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **Storage**: Uploaded image storage via [`StorageBackend`]
//!
//! # Example
//!
//! ```no_run
//! use menuboard_common::{AppResult, Config};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     println!("Serving images from {}", config.storage_base_url());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod storage;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use storage::{
    ImageFolder, LocalStorage, StorageBackend, StorageService, StoredFile, generate_file_name,
};
