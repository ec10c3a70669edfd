//! Error types for the order actor.

use actor_store::StoreError;
use thiserror::Error;

/// Errors surfaced by cart commands and order actions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A request parameter failed validation (zero quantity, negative
    /// price, rating out of range).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No order matched the request. Also returned when an order exists but
    /// belongs to a different customer, so callers cannot probe for other
    /// customers' orders.
    #[error("order not found: {0}")]
    OrderNotFound(String),

    /// The cart has no line item with the given id.
    #[error("item not found in cart: {0}")]
    ItemNotFound(String),

    /// The cart already has a line for this menu entry. Callers adjust the
    /// quantity of the existing line instead.
    #[error("item already in cart: {0}")]
    DuplicateItem(String),

    /// The order's current state does not admit the requested transition.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// The store actor is unavailable or failed internally.
    #[error("storage failure: {0}")]
    StorageFailure(String),
}

impl OrderError {
    /// Recover the domain error from a store-level failure.
    ///
    /// Entity errors cross the actor boundary as boxed trait objects; this
    /// downcasts them back to [`OrderError`]. Anything else (closed actor,
    /// missing document on the generic paths) collapses into
    /// [`OrderError::StorageFailure`] or [`OrderError::OrderNotFound`].
    pub fn from_store(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => OrderError::OrderNotFound(id),
            StoreError::Entity(inner) => match inner.downcast::<OrderError>() {
                Ok(domain) => *domain,
                Err(other) => OrderError::StorageFailure(other.to_string()),
            },
            other => OrderError::StorageFailure(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_errors_downcast_to_domain_kinds() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(OrderError::DuplicateItem("abc".into()));
        let recovered = OrderError::from_store(StoreError::Entity(boxed));
        assert_eq!(recovered, OrderError::DuplicateItem("abc".into()));
    }

    #[test]
    fn not_found_and_transport_errors_map_by_kind() {
        assert_eq!(
            OrderError::from_store(StoreError::NotFound("o1".into())),
            OrderError::OrderNotFound("o1".into())
        );
        assert!(matches!(
            OrderError::from_store(StoreError::ActorClosed),
            OrderError::StorageFailure(_)
        ));
    }
}
