//! Menu actor: owner of the restaurant catalog.

pub mod entity;
pub mod error;

pub use entity::{MenuAction, MenuCommand, MenuFilter};
pub use error::MenuError;

use crate::clients::MenuClient;
use crate::model::{MenuId, MenuItem};
use actor_store::StoreActor;

const MAILBOX_SIZE: usize = 32;

/// Creates a new menu actor and its client.
pub fn new() -> (StoreActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = StoreActor::new(MAILBOX_SIZE, MenuId::generate);
    (actor, MenuClient::new(generic_client))
}
