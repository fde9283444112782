//! Store errors module

use thiserror::Error;

/// Failures produced by the fruit store and its validation front door.
///
/// Every failure is classified so the HTTP adapter can map it to a single
/// response status without inspecting message text.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Fruit name already registered: {name}")]
    DuplicateName { name: String },

    #[error("Invalid fruit id: {raw}")]
    InvalidIdFormat { raw: String },

    #[error("Fruit not found: {id}")]
    NotFound { id: u64 },
}
