//! HTTP-level tests driving the full router over the in-memory store.

mod helpers;

mod auth_test;
mod content_test;
mod guard_test;
mod setup_test;
