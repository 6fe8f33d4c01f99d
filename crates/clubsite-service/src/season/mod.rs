//! Season and roster management.

pub mod service;

pub use service::SeasonService;
