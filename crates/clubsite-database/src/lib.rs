//! # clubsite-database
//!
//! Persistence for the club site: the PostgreSQL connection pool, migrations,
//! the repository traits consumed by the auth and service layers, and their
//! PostgreSQL and in-memory implementations.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{CredentialStore, NewsStore, SeasonStore, SiteConfigStore, Stores};
