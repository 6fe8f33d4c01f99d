//! In-memory repository implementations.
//!
//! Selected with `database.provider = "memory"`. Used by the test suites and
//! for running the site locally without PostgreSQL.

pub mod news;
pub mod season;
pub mod site_config;
pub mod user;

pub use news::MemoryNewsStore;
pub use season::MemorySeasonStore;
pub use site_config::MemorySiteConfigStore;
pub use user::MemoryUserStore;
