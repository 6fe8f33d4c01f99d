//! Custom Axum extractors.

pub mod admin;
pub mod json;
pub mod pagination;
pub mod path;
pub mod session;

pub use admin::AdminUser;
pub use json::{AppJson, ValidatedJson};
pub use pagination::NewsListParams;
pub use session::{SESSION_COOKIE, session_token};
