use crate::clients::{MenuClient, OrderClient};
use crate::notify::Notify;
use crate::order_actor::OrderContext;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the ordering backend.
///
/// `OrderSystem` spawns the order and menu actors, wires the order actor's
/// context (notifier, cart-lookup policy), and hands out the clients. Drop
/// the system via [`shutdown`](Self::shutdown) to close the mailboxes and
/// join the actor tasks.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let menu_id = system.menu_client.add_item(dish).await?;
/// let cart = system
///     .order_client
///     .add_to_cart(customer, restaurant, item, pickup)
///     .await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the order actor.
    pub order_client: OrderClient,

    /// Client for interacting with the menu actor.
    pub menu_client: MenuClient,

    /// Task handles for the running actors, joined on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Start the system with the default context (log-only notifier).
    pub fn new() -> Self {
        Self::with_context(OrderContext::default())
    }

    /// Start the system with a custom notifier.
    pub fn with_notifier(notifier: Arc<dyn Notify>) -> Self {
        Self::with_context(OrderContext::new(notifier))
    }

    /// Start the system with a fully specified order-actor context.
    pub fn with_context(context: OrderContext) -> Self {
        let (order_actor, order_client) = crate::order_actor::new();
        let (menu_actor, menu_client) = crate::menu_actor::new();

        let order_handle = tokio::spawn(order_actor.run(context));
        let menu_handle = tokio::spawn(menu_actor.run(()));

        Self {
            order_client,
            menu_client,
            handles: vec![order_handle, menu_handle],
        }
    }

    /// Gracefully shut down the system.
    ///
    /// Dropping the clients closes their mailbox senders; each actor drains
    /// its queue and exits its event loop. Returns an error if any actor
    /// task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("shutting down order system");

        drop(self.order_client);
        drop(self.menu_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("actor task failed: {e:?}");
                return Err(format!("actor task failed: {e:?}"));
            }
        }

        info!("order system shutdown complete");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
