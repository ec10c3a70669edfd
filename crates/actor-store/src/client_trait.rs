//! # StoreHandle Trait
//!
//! Shared surface for resource-specific client wrappers. A wrapper exposes
//! its inner [`StoreClient`] and an error mapping; `get`, `delete` and
//! `find` come for free.

use crate::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard read/delete/scan
/// operations over their wrapped [`StoreClient`].
///
/// Domain-specific operations (creates with payload conversion, commands,
/// actions) stay on the wrapper's own `impl`; this trait only covers the
/// calls whose shape is identical for every entity.
#[async_trait]
pub trait StoreHandle<T: StoreEntity>: Send + Sync {
    /// The wrapper's error type.
    type Error: Send + Sync;

    /// Access the wrapped generic client.
    fn inner(&self) -> &StoreClient<T>;

    /// Map framework errors into the wrapper's error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a document by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a document by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Filter scan over the collection.
    #[tracing::instrument(skip(self, filter))]
    async fn find(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(filter).await.map_err(Self::map_error)
    }
}
