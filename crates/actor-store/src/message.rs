//! # Store Messages
//!
//! The request vocabulary spoken between [`StoreClient`](crate::StoreClient)
//! and [`StoreActor`](crate::StoreActor).
//!
//! Requests come in two granularities:
//!
//! - **Document requests** (`Create`, `Get`, `Update`, `Delete`, `Action`)
//!   address one document by id. They map onto the standard resource
//!   lifecycle, with `Action` as the escape hatch for domain transitions.
//! - **Collection requests** (`Query`, `Command`) address the collection.
//!   `Query` is a read-only filter scan; `Command` is an atomic
//!   read-modify-write over the whole store, which is how find-or-create
//!   and multi-document mutations stay race-free.
//!
//! Every variant is generic over the entity's associated types, so a payload
//! built for one entity type cannot be sent to another entity's actor.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// One-shot reply channel carried inside each request.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request to a [`StoreActor`](crate::StoreActor).
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Query {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Command {
        command: T::Command,
        respond_to: Response<T::CommandResult>,
    },
}
