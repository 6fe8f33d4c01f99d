//! Site configuration document.

pub mod service;

pub use service::SiteConfigService;
