//! Error types for the menu actor.

use actor_store::StoreError;
use thiserror::Error;

/// Errors surfaced by catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("invalid menu item: {0}")]
    InvalidItem(String),

    #[error("menu item not found: {0}")]
    NotFound(String),

    #[error("storage failure: {0}")]
    StorageFailure(String),
}

impl MenuError {
    pub fn from_store(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => MenuError::NotFound(id),
            StoreError::Entity(inner) => match inner.downcast::<MenuError>() {
                Ok(domain) => *domain,
                Err(other) => MenuError::StorageFailure(other.to_string()),
            },
            other => MenuError::StorageFailure(other.to_string()),
        }
    }
}
