//! # clubsite-entity
//!
//! Domain entity models for the club site. Every struct in this crate
//! represents a database row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and table-backed
//! entities additionally derive `sqlx::FromRow`.

pub mod news;
pub mod season;
pub mod site_config;
pub mod user;
