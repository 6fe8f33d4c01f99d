//! News article management.

pub mod service;

pub use service::{NewsInput, NewsPatch, NewsService};
