//! Order actor: the single owner of the order collection.
//!
//! All cart and order traffic funnels through one [`StoreActor`] task, so a
//! check-then-act sequence like "does this customer have an open cart?"
//! cannot interleave with another request for the same customer.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::{CartCommand, CartUpdate, OrderAction, OrderFilter, OrderUpdate};
pub use error::OrderError;

use crate::clients::OrderClient;
use crate::model::{Order, OrderId};
use crate::notify::{LogNotifier, Notify};
use actor_store::StoreActor;
use std::sync::Arc;

const MAILBOX_SIZE: usize = 32;

/// Which orders count as "the cart" when clearing items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartLookup {
    /// Only an order still in the add-to-cart stage. This is the same filter
    /// the other cart commands use.
    #[default]
    StagePending,
    /// Any pending order, whatever its stage. Lets a customer empty a cart
    /// they have already walked into checkout.
    PendingOnly,
}

/// Dependencies injected into the order actor's event loop.
pub struct OrderContext {
    pub notifier: Arc<dyn Notify>,
    pub cart_lookup: CartLookup,
}

impl OrderContext {
    pub fn new(notifier: Arc<dyn Notify>) -> Self {
        Self {
            notifier,
            cart_lookup: CartLookup::default(),
        }
    }
}

impl Default for OrderContext {
    fn default() -> Self {
        Self::new(Arc::new(LogNotifier))
    }
}

/// Creates a new order actor and its client.
pub fn new() -> (StoreActor<Order>, OrderClient) {
    let (actor, generic_client) = StoreActor::new(MAILBOX_SIZE, OrderId::generate);
    (actor, OrderClient::new(generic_client))
}
