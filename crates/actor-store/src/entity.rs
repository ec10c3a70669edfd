//! # StoreEntity Trait
//!
//! The contract a document type must satisfy to be managed by a
//! [`StoreActor`](crate::StoreActor). Associated types pin down every payload
//! that can cross the actor boundary, so a request built for one entity type
//! can never be delivered to another's actor.
//!
//! Two kinds of behavior hooks exist:
//!
//! - **Document hooks** (`on_create`, `on_update`, `on_delete`,
//!   `handle_action`) run against a single document that the actor has
//!   already located by id.
//! - **The collection hook** (`handle_command`) runs against the whole
//!   [`Store`], for operations that must locate documents by filter, touch
//!   several documents, or create one when the lookup comes up empty. Because
//!   the actor processes one message at a time, everything done inside
//!   `handle_command` is atomic with respect to the collection.
//!
//! `on_create`, `on_delete` and `handle_command` have default
//! implementations; entities without collection-level operations can set
//! `Command` to an uninhabited enum and ignore the hook.

use crate::store::Store;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait a document type implements to be managed by a `StoreActor`.
///
/// # Error granularity
///
/// One error enum per entity, covering every hook. The alternative - a
/// distinct error type per operation - buys a little precision at the cost
/// of a lot of boilerplate; a single enum keeps client-side matching simple.
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// Unique document identifier. Minted by the generator closure passed to
    /// [`StoreActor::new`](crate::StoreActor::new).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload for creating a new document.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing document.
    type Update: Send + Sync + Debug;

    /// Document-scoped operation that doesn't fit the CRUD mold
    /// (e.g. a status transition with a precondition).
    type Action: Send + Sync + Debug;

    /// Result type of [`handle_action`](Self::handle_action).
    type ActionResult: Send + Sync + Debug;

    /// Predicate payload for collection scans; see [`matches`](Self::matches).
    type Filter: Send + Sync + Debug;

    /// Collection-scoped operation; see [`handle_command`](Self::handle_command).
    type Command: Send + Sync + Debug;

    /// Result type of [`handle_command`](Self::handle_command).
    type CommandResult: Send + Sync + Debug;

    /// Runtime dependencies injected via [`StoreActor::run`](crate::StoreActor::run).
    /// Use `()` when the entity needs none.
    type Context: Send + Sync;

    /// The entity's error type, returned by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the document from a freshly minted id and the create payload.
    /// Runs synchronously, before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The document's identifier.
    fn id(&self) -> &Self::Id;

    /// Whether this document satisfies the filter. Drives
    /// [`Store::find`](crate::Store::find) and `Query` requests.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Called after the document is constructed, before it is inserted.
    /// Failing here aborts the create and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload to this document.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the document is removed. Failing here aborts the delete.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a document-scoped action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Handle a collection-scoped command with exclusive access to the whole
    /// store. The default panics via `unreachable!` only for inhabited
    /// command types that were never meant to be sent; entities that use
    /// commands must override it, and entities that don't should make
    /// `Command` uninhabited so the request cannot even be constructed.
    async fn handle_command(
        _store: &mut Store<Self>,
        command: Self::Command,
        _ctx: &Self::Context,
    ) -> Result<Self::CommandResult, Self::Error> {
        unreachable!("entity received a command but does not implement handle_command: {command:?}")
    }
}
