//! PostgreSQL repository implementations for the club site entities.

pub mod news;
pub mod season;
pub mod site_config;
pub mod user;

pub use news::NewsRepository;
pub use season::SeasonRepository;
pub use site_config::SiteConfigRepository;
pub use user::UserRepository;
