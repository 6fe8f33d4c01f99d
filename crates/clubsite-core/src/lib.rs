//! # clubsite-core
//!
//! Core crate for the club site backend. Contains configuration schemas,
//! the media upload trait, pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other clubsite crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
