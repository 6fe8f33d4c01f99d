//! # clubsite-service
//!
//! Business logic for the club site content: news, seasons, the site
//! configuration document, and image hosting.
//!
//! Services follow constructor injection: repositories and the image
//! uploader are provided at construction time as `Arc` trait objects.

pub mod context;
pub mod media;
pub mod news;
pub mod season;
pub mod site_config;

pub use context::RequestContext;
pub use media::{CloudinaryUploader, DisabledUploader, MediaService};
pub use news::NewsService;
pub use season::SeasonService;
pub use site_config::SiteConfigService;
