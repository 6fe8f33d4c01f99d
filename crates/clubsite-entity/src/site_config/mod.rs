//! Site-wide configuration document.

pub mod model;

pub use model::{MapCoordinates, SiteConfig, SiteConfigUpdate};
