//! # Store Actor
//!
//! The server half of the framework: owns the [`Store`] and drains the
//! request mailbox sequentially. One actor task per entity type.
//!
//! **Concurrency model**: messages are processed one at a time, each to
//! completion, so every precondition check and the mutation it guards are
//! atomic with respect to the collection. No lock is held anywhere; exclusive
//! ownership of the store by this task is the whole synchronization story.
//! Distinct entity types get distinct actors and run in parallel.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::store::Store;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that manages one entity type's document collection.
///
/// Created together with its [`StoreClient`] by [`StoreActor::new`]; run via
/// [`StoreActor::run`], typically inside `tokio::spawn`. The actor exits when
/// every client handle has been dropped.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: Store<T>,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Create an actor and its client.
    ///
    /// `buffer_size` bounds the mailbox: when it is full, client calls wait.
    /// `mint_id` produces document ids for `Create` requests and for
    /// documents created inside collection commands.
    pub fn new(
        buffer_size: usize,
        mint_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Store::new(mint_id),
        };
        (actor, StoreClient::new(sender))
    }

    /// Run the event loop until the mailbox closes.
    ///
    /// `context` is injected into every entity hook; dependencies are bound
    /// here rather than in `new` so actors can be created before their
    /// dependencies exist.
    pub async fn run(mut self, context: T::Context) {
        // Short type name for log lines: "Order", not the full module path.
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = self.store.mint_id();
                    match T::from_create_params(id.clone(), params) {
                        Ok(mut document) => {
                            if let Err(e) = document.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                                continue;
                            }
                            self.store.insert(document);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let document = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = document.is_some(), "Get");
                    let _ = respond_to.send(Ok(document));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(document) = self.store.get_mut(&id) {
                        if let Err(e) = document.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(document.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(document) = self.store.get(&id) {
                        if let Err(e) = document.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(StoreError::Entity(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(document) = self.store.get_mut(&id) {
                        let result = document
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| StoreError::Entity(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Query { filter, respond_to } => {
                    let matches = self.store.find(&filter);
                    debug!(entity_type, ?filter, hits = matches.len(), "Query");
                    let _ = respond_to.send(Ok(matches));
                }
                StoreRequest::Command {
                    command,
                    respond_to,
                } => {
                    debug!(entity_type, ?command, "Command");
                    let result = T::handle_command(&mut self.store, command, &context)
                        .await
                        .map_err(|e| StoreError::Entity(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, size = self.store.len(), "Command ok"),
                        Err(e) => warn!(entity_type, error = %e, "Command failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
