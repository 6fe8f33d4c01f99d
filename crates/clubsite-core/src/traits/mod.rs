//! Core traits defined in `clubsite-core` and implemented by other crates.

pub mod media;

pub use media::{ImageUploader, UploadedImage};
