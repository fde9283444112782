//! HTTP adapter for the fruit catalog
//!
//! This crate bridges the fruitd core to the outside world over axum. It owns
//! the router, the shared application state, and the mapping from store
//! failures to HTTP status codes; the core itself stays HTTP-free.

pub mod handlers;
pub mod http_server;

pub use handlers::{ApiError, AppState};
pub use http_server::{router, serve};
