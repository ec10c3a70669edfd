//! Request payloads accepted by the order actor.
//!
//! Cart commands are keyed by *customer*, not by order id: the actor locates
//! (or creates) the customer's cart inside a single message, which is what
//! makes find-or-create atomic. Order actions are keyed by order id and carry
//! the customer id for an ownership check.

use crate::model::{
    CustomerId, LineItemId, NewLineItem, Order, OrderStage, OrderStatus, RestaurantId,
};
use chrono::{DateTime, Utc};

/// Collection-level cart operations, resolved against the customer's current
/// cart within one actor message.
#[derive(Debug)]
pub enum CartCommand {
    /// Add a line to the customer's cart, opening a new cart if none exists.
    /// Fails with `DuplicateItem` if the cart already carries this menu entry.
    AddItem {
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
        item: NewLineItem,
        pickup_time: DateTime<Utc>,
    },
    /// Remove one line from the customer's open cart.
    RemoveItem {
        customer_id: CustomerId,
        item_id: LineItemId,
    },
    /// Empty the customer's cart, leaving the order document in place.
    ClearItems { customer_id: CustomerId },
    /// Set the quantity of an existing line and recompute the total.
    UpdateItemQuantity {
        customer_id: CustomerId,
        item_id: LineItemId,
        quantity: u32,
    },
    /// Move the customer's pending order to the given stage, optionally
    /// rescheduling pickup. Status is left alone.
    ///
    /// Any enumerated stage is accepted; the caller owns the flow. Reaching
    /// [`OrderStage::PlaceOrder`] fires the placement notification.
    AdvanceStage {
        customer_id: CustomerId,
        stage: OrderStage,
        pickup_time: Option<DateTime<Utc>>,
    },
}

/// Result of a [`CartCommand`]: the order after the change, and whether the
/// command opened a new cart.
#[derive(Debug, Clone)]
pub struct CartUpdate {
    pub order: Order,
    pub created: bool,
}

/// Document-level operations on a single order.
#[derive(Debug)]
pub enum OrderAction {
    /// Mark a placed order as picked up by the customer.
    CompletePickup { customer_id: CustomerId },
    /// Cancel a pending order.
    Cancel { customer_id: CustomerId },
    /// Rate a completed order, 1 to 5.
    Rate { customer_id: CustomerId, rating: u8 },
}

/// Direct field updates on an order. Item and lifecycle changes go through
/// [`CartCommand`] and [`OrderAction`]; this only covers scheduling.
#[derive(Debug, Default)]
pub struct OrderUpdate {
    pub pickup_time: Option<DateTime<Utc>>,
}

/// Predicate for order queries and for the cart lookups inside commands.
/// Empty stage/status lists match any value.
#[derive(Debug, Clone)]
pub struct OrderFilter {
    pub customer_id: Option<CustomerId>,
    pub stages: Vec<OrderStage>,
    pub statuses: Vec<OrderStatus>,
}

impl OrderFilter {
    /// Every order belonging to a customer, regardless of state.
    pub fn for_customer(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
            stages: Vec::new(),
            statuses: Vec::new(),
        }
    }

    /// The customer's open cart: still in the add-to-cart stage and pending.
    /// At most one order per customer can match this filter.
    pub fn open_cart(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
            stages: vec![OrderStage::AddToCart],
            statuses: vec![OrderStatus::Pending],
        }
    }

    /// The cart a customer still sees as active: pending and not yet
    /// placed. Broader than [`OrderFilter::open_cart`] because a cart
    /// sitting in checkout is still the customer's current cart.
    pub fn active_cart(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
            stages: vec![OrderStage::AddToCart, OrderStage::Checkout],
            statuses: vec![OrderStatus::Pending],
        }
    }

    /// The customer's pending order in any stage. Used by stage advancement,
    /// which walks the order through checkout and placement. Several orders
    /// can match (a placed order still pending plus a fresh cart); commands
    /// resolve the tie toward the newest.
    pub fn any_pending(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
            stages: Vec::new(),
            statuses: vec![OrderStatus::Pending],
        }
    }

    /// The customer's placed-but-not-yet-prepared orders: stage advanced to
    /// placement while the status is still pending.
    pub fn placed_pending(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
            stages: vec![OrderStage::PlaceOrder],
            statuses: vec![OrderStatus::Pending],
        }
    }

    /// Completed orders for a customer.
    pub fn completed(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
            stages: Vec::new(),
            statuses: vec![OrderStatus::Completed],
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        if let Some(customer_id) = &self.customer_id {
            if &order.customer_id != customer_id {
                return false;
            }
        }
        if !self.stages.is_empty() && !self.stages.contains(&order.stage) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&order.status) {
            return false;
        }
        true
    }
}
