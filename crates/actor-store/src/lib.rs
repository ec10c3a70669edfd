//! # Actor Store
//!
//! A small framework for building **document-store actors**: one Tokio task
//! owns an in-memory collection of documents of a single entity type and
//! processes every request against that collection **sequentially**.
//!
//! ## Why an actor in front of the collection?
//!
//! Most of the operations a storage-backed service performs are
//! read-modify-write: look a document up, check a precondition, mutate,
//! persist. Done naively over a shared map this is a check-then-act race -
//! two concurrent requests can both observe the same "before" state and both
//! apply their mutation. Routing every request through a single actor task
//! closes that window without any locking: a request is processed to
//! completion before the next one is picked up, so every precondition check
//! and its mutation are atomic with respect to the collection.
//!
//! ## The three layers
//!
//! 1. **Entity layer** ([`StoreEntity`]) - your domain model and business
//!    rules. Associated types describe the payloads; hooks describe the
//!    behavior.
//! 2. **Runtime layer** ([`StoreActor`]) - the event loop. Owns the
//!    [`Store`] and drains a bounded mpsc mailbox.
//! 3. **Interface layer** ([`StoreClient`]) - a cheap-to-clone handle that
//!    turns method calls into messages and awaits the oneshot reply.
//!
//! ## Request vocabulary
//!
//! Two granularities of request are supported (see [`StoreRequest`]):
//!
//! - **Document requests** address one document by id: `Create`, `Get`,
//!   `Update`, `Delete`, `Action`.
//! - **Collection requests** address the collection as a whole: `Query`
//!   runs a filter scan, and `Command` hands the entity a mutable view of
//!   the entire [`Store`] for multi-document or find-or-create logic that
//!   must be atomic (e.g. "append to the open cart, or create one if none
//!   exists").
//!
//! ## Identifier minting
//!
//! Document ids are produced by a generator closure injected at actor
//! construction, so the id scheme (sequential, random, timestamped) is the
//! application's decision, not the framework's.
//!
//! ## Context injection
//!
//! Dependencies (other clients, notification handles, policy knobs) are
//! passed to [`StoreActor::run`], not to the constructor. This late binding
//! lets mutually dependent actors be created first and wired afterwards.
//!
//! ```rust
//! use actor_store::{StoreActor, StoreEntity};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: String, text: String }
//!
//! #[derive(Debug)] struct NoteCreate { text: String }
//! #[derive(Debug)] enum NoteAction {}
//! #[derive(Debug)] enum NoteCommand {}
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl StoreEntity for Note {
//!     type Id = String;
//!     type Create = NoteCreate;
//!     type Update = String;
//!     type Action = NoteAction;
//!     type ActionResult = ();
//!     type Filter = ();
//!     type Command = NoteCommand;
//!     type CommandResult = ();
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn from_create_params(id: String, params: NoteCreate) -> Result<Self, NoteError> {
//!         Ok(Self { id, text: params.text })
//!     }
//!     fn id(&self) -> &String { &self.id }
//!     fn matches(&self, _filter: &()) -> bool { true }
//!     async fn on_update(&mut self, text: String, _ctx: &()) -> Result<(), NoteError> {
//!         self.text = text;
//!         Ok(())
//!     }
//!     async fn handle_action(&mut self, action: NoteAction, _ctx: &()) -> Result<(), NoteError> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut n = 0u64;
//!     let (actor, client) = StoreActor::<Note>::new(16, move || {
//!         n += 1;
//!         format!("note_{n}")
//!     });
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
//!     let note = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(note.text, "hello");
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockStore`](mock::MockStore) with a
//! fluent expectation API, plus low-level channel helpers, so client-side
//! logic can be tested without spawning a real actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreHandle;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use store::Store;
