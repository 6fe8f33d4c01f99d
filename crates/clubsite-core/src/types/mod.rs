//! Core type definitions used across the clubsite workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
