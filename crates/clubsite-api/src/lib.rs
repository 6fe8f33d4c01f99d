//! # clubsite-api
//!
//! HTTP layer for the club site built on Axum.
//!
//! Provides the admin page guard, the JSON endpoints for auth, first-run
//! setup and content, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
