//! Lifecycle notifications for orders.
//!
//! The order actor announces placement, completion and cancellation through
//! this seam. The default implementation just logs; a push-notification or
//! kitchen-display integration plugs in here without touching the actor.

use crate::model::Order;
use tracing::info;

/// Receiver of order lifecycle events. Called from inside the order actor's
/// event loop, so implementations must be quick and non-blocking.
pub trait Notify: Send + Sync {
    fn order_placed(&self, order: &Order);
    fn order_completed(&self, order: &Order);
    fn order_cancelled(&self, order: &Order);
}

/// Default notifier: structured log lines only.
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn order_placed(&self, order: &Order) {
        info!(
            order_id = %order.id,
            order_code = %order.order_code,
            total = order.total_amount,
            "order placed"
        );
    }

    fn order_completed(&self, order: &Order) {
        info!(
            order_id = %order.id,
            order_code = %order.order_code,
            "order picked up"
        );
    }

    fn order_cancelled(&self, order: &Order) {
        info!(
            order_id = %order.id,
            order_code = %order.order_code,
            "order cancelled"
        );
    }
}
