//! Core business logic for menuboard.

pub mod services;

pub use services::*;
