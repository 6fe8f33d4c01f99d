//! Image hosting: `data:` URL handling and upload backends.

pub mod cloudinary;
pub mod data_url;
pub mod disabled;
pub mod service;

pub use cloudinary::CloudinaryUploader;
pub use data_url::{DataUrl, is_data_url};
pub use disabled::DisabledUploader;
pub use service::MediaService;
