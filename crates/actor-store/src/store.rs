//! # Document Store
//!
//! The in-memory collection owned by a [`StoreActor`](crate::StoreActor).
//! Wraps the document map together with the id-minting closure so that
//! collection-level commands (see
//! [`StoreEntity::handle_command`](crate::StoreEntity::handle_command)) can
//! perform find-or-create logic without reaching back into the actor.
//!
//! The store is never shared: exactly one actor task holds it, which is what
//! makes every read-modify-write against it race-free.

use crate::entity::StoreEntity;
use std::collections::HashMap;

/// The document collection for one entity type, plus its id minter.
pub struct Store<T: StoreEntity> {
    documents: HashMap<T::Id, T>,
    mint_id: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: StoreEntity> Store<T> {
    pub(crate) fn new(mint_id: impl FnMut() -> T::Id + Send + 'static) -> Self {
        Self {
            documents: HashMap::new(),
            mint_id: Box::new(mint_id),
        }
    }

    /// Produce a fresh document id.
    pub fn mint_id(&mut self) -> T::Id {
        (self.mint_id)()
    }

    /// Insert a document under its own id, replacing any previous document
    /// with the same id.
    pub fn insert(&mut self, document: T) {
        self.documents.insert(document.id().clone(), document);
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.documents.get(id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.documents.get_mut(id)
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.documents.remove(id)
    }

    /// Scan the collection and clone every document matching the filter.
    /// Result order is unspecified; callers that care sort on a document
    /// field.
    pub fn find(&self, filter: &T::Filter) -> Vec<T> {
        self.documents
            .values()
            .filter(|doc| doc.matches(filter))
            .cloned()
            .collect()
    }

    /// Mutable iteration over every document matching the filter.
    pub fn find_mut<'a>(
        &'a mut self,
        filter: &'a T::Filter,
    ) -> impl Iterator<Item = &'a mut T> + 'a {
        self.documents
            .values_mut()
            .filter(|doc| doc.matches(filter))
    }

    /// Mutable handle to the first document matching the filter, if any.
    ///
    /// Intended for filters that identify at most one document (the callers
    /// in this workspace pair it with uniqueness invariants); with a broader
    /// filter the choice among matches is arbitrary.
    pub fn find_one_mut(&mut self, filter: &T::Filter) -> Option<&mut T> {
        self.documents.values_mut().find(|doc| doc.matches(filter))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
