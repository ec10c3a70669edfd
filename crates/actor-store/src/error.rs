//! # Framework Errors
//!
//! Failures that originate in the store machinery itself, as opposed to the
//! entity's own error type (which travels boxed inside [`StoreError::Entity`]).
//! Clients unbox and downcast `Entity` to recover the domain taxonomy;
//! everything else is an infrastructure fault.

/// Errors produced by the store actor and its channels.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The actor's mailbox is closed; the actor has shut down.
    #[error("store actor closed")]
    ActorClosed,
    /// The actor dropped the reply channel without answering.
    #[error("store actor dropped response channel")]
    ActorDropped,
    /// No document with the requested id exists.
    #[error("document not found: {0}")]
    NotFound(String),
    /// The entity's own error, boxed for transport.
    #[error("entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}
