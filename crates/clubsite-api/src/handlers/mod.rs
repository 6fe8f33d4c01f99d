//! Route handlers organized by domain.

pub mod auth;
pub mod health;
pub mod news;
pub mod season;
pub mod setup;
pub mod site_config;
