//! Order documents: the cart-to-pickup lifecycle state, line items, and the
//! derived total.
//!
//! An order is created implicitly by the first add-to-cart for a customer
//! with no open cart, then mutated by cart commands while it is still a
//! cart, and after placement only moves through status/stage transitions
//! (plus an optional rating). Orders are never deleted; cancellation is a
//! transition.

use super::{CustomerId, RestaurantId};
use crate::ids::{self, IdError};
use crate::model::menu::MenuId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque identifier of an order document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    pub fn parse(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        if ids::is_object_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(IdError(raw))
        }
    }

    pub fn generate() -> Self {
        Self(ids::object_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of one line within an order. Distinct from the menu reference:
/// the line has its own identity so removal and quantity updates address the
/// line, not the catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(String);

impl LineItemId {
    pub fn parse(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        if ids::is_object_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(IdError(raw))
        }
    }

    pub fn generate() -> Self {
        Self(ids::object_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order status. The numeric codes are part of the wire contract with
/// existing clients and are kept stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Cancelled,
    Pending,
    Preparing,
    ReadyForPickup,
    Completed,
}

impl OrderStatus {
    pub fn code(self) -> u8 {
        match self {
            OrderStatus::Cancelled => 0,
            OrderStatus::Pending => 1,
            OrderStatus::Preparing => 2,
            OrderStatus::ReadyForPickup => 3,
            OrderStatus::Completed => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(OrderStatus::Cancelled),
            1 => Some(OrderStatus::Pending),
            2 => Some(OrderStatus::Preparing),
            3 => Some(OrderStatus::ReadyForPickup),
            4 => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

/// Where the order sits in the cart-to-pickup flow. Tracked independently of
/// [`OrderStatus`]; the two are correlated by the operations that set them,
/// not by a constraint on the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStage {
    AddToCart,
    Checkout,
    PlaceOrder,
    AlreadyPickedUp,
    Cancelled,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub menu_id: MenuId,
    pub name: String,
    pub image: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl LineItem {
    /// This line's contribution to the order total.
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Caller-supplied payload for a line item about to enter a cart.
///
/// Name, image and unit price are trusted from the caller rather than
/// re-fetched from the menu catalog; see the note on `AddItem` in
/// [`crate::order_actor`].
#[derive(Debug, Clone)]
pub struct NewLineItem {
    pub menu_id: MenuId,
    pub name: String,
    pub image: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl NewLineItem {
    /// Mint a line identity and turn the payload into a stored line.
    pub fn into_line_item(self) -> LineItem {
        LineItem {
            id: LineItemId::generate(),
            menu_id: self.menu_id,
            name: self.name,
            image: self.image,
            unit_price: self.unit_price,
            quantity: self.quantity,
        }
    }
}

/// Payload for creating an order, used when an add-to-cart finds no open
/// cart for the customer.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub item: NewLineItem,
    pub pickup_time: DateTime<Utc>,
}

/// A customer order, from open cart through pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Human-readable code shown to the customer and restaurant staff.
    pub order_code: String,
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub items: Vec<LineItem>,
    /// Always equals the sum of line subtotals; recomputed or adjusted by
    /// every item mutation, never set independently.
    pub total_amount: f64,
    pub status: OrderStatus,
    pub stage: OrderStage,
    pub pickup_time: DateTime<Utc>,
    /// Customer rating, 1 to 5; settable only once the order is completed.
    pub rating: Option<u8>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Open a new cart holding its first line item.
    pub fn open_cart(
        id: OrderId,
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
        first_item: LineItem,
        pickup_time: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        let total_amount = first_item.subtotal();
        Self {
            id,
            order_code: ids::order_code(),
            customer_id,
            restaurant_id,
            items: vec![first_item],
            total_amount,
            status: OrderStatus::Pending,
            stage: OrderStage::AddToCart,
            pickup_time,
            rating: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Recompute the total from scratch over all lines.
    pub fn recompute_total(&mut self) {
        self.total_amount = self.items.iter().map(LineItem::subtotal).sum();
    }

    /// Whether the cart already carries a line for this menu entry.
    pub fn has_menu_item(&self, menu_id: &MenuId) -> bool {
        self.items.iter().any(|line| &line.menu_id == menu_id)
    }

    /// Position of a line by its own identity.
    pub fn line_position(&self, item_id: &LineItemId) -> Option<usize> {
        self.items.iter().position(|line| &line.id == item_id)
    }

    /// Refresh the modification timestamp. Every mutating operation calls
    /// this last.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: u32) -> LineItem {
        NewLineItem {
            menu_id: MenuId::generate(),
            name: "Pad Thai".to_string(),
            image: "pad-thai.jpg".to_string(),
            unit_price: price,
            quantity,
        }
        .into_line_item()
    }

    #[test]
    fn open_cart_derives_total_from_first_item() {
        let order = Order::open_cart(
            OrderId::generate(),
            CustomerId::generate(),
            RestaurantId::generate(),
            item(10.0, 2),
            Utc::now(),
        );
        assert_eq!(order.total_amount, 20.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.stage, OrderStage::AddToCart);
        assert!(order.rating.is_none());
        assert!(ids::is_object_id(order.id.as_str()));
    }

    #[test]
    fn recompute_total_sums_all_lines() {
        let mut order = Order::open_cart(
            OrderId::generate(),
            CustomerId::generate(),
            RestaurantId::generate(),
            item(10.0, 2),
            Utc::now(),
        );
        order.items.push(item(3.5, 4));
        order.recompute_total();
        assert_eq!(order.total_amount, 34.0);

        order.items.clear();
        order.recompute_total();
        assert_eq!(order.total_amount, 0.0);
    }

    #[test]
    fn status_codes_round_trip() {
        for status in [
            OrderStatus::Cancelled,
            OrderStatus::Pending,
            OrderStatus::Preparing,
            OrderStatus::ReadyForPickup,
            OrderStatus::Completed,
        ] {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code(5), None);
    }
}
