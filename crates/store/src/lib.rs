//! Fruitd in-memory fruit catalog
//!
//! This crate provides the core of the fruitd service: the owned fruit
//! collection with sequential id assignment and name uniqueness, plus the
//! structural validation applied to create requests before they reach it.

pub mod catalog;
pub mod errors;
pub mod validation;

// Re-export key types for easy access
pub use catalog::{parse_fruit_id, Fruit, FruitStore, NewFruit};
pub use errors::StoreError;
pub use validation::validate_create_request;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
