//! [`StoreEntity`] implementation for [`Order`].
//!
//! Cart commands run against the whole order collection inside one actor
//! message, so "look up the customer's cart, then mutate or create it" is
//! atomic with respect to every other request. Order actions run against one
//! document and enforce ownership and lifecycle preconditions before
//! mutating.

use super::actions::{CartCommand, CartUpdate, OrderAction, OrderFilter, OrderUpdate};
use super::{CartLookup, OrderContext, OrderError};
use crate::model::{NewLineItem, Order, OrderCreate, OrderId, OrderStage, OrderStatus};
use actor_store::{Store, StoreEntity};
use async_trait::async_trait;
use tracing::info;

/// Reject a line payload before it enters any cart.
fn validate_new_item(item: &NewLineItem) -> Result<(), OrderError> {
    if item.quantity == 0 {
        return Err(OrderError::InvalidInput("quantity must be at least 1".into()));
    }
    if !item.unit_price.is_finite() || item.unit_price < 0.0 {
        return Err(OrderError::InvalidInput(format!(
            "unit price must be non-negative, got {}",
            item.unit_price
        )));
    }
    Ok(())
}

#[async_trait]
impl StoreEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Filter = OrderFilter;
    type Command = CartCommand;
    type CommandResult = CartUpdate;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        validate_new_item(&params.item)?;
        Ok(Order::open_cart(
            id,
            params.customer_id,
            params.restaurant_id,
            params.item.into_line_item(),
            params.pickup_time,
        ))
    }

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter.matches(self)
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        if let Some(pickup_time) = update.pickup_time {
            self.pickup_time = pickup_time;
            self.touch();
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<Order, OrderError> {
        match action {
            OrderAction::CompletePickup { customer_id } => {
                if self.customer_id != customer_id {
                    return Err(OrderError::OrderNotFound(self.id.to_string()));
                }
                // No state precondition: a repeat call re-applies the same
                // terminal state.
                self.status = OrderStatus::Completed;
                self.stage = OrderStage::AlreadyPickedUp;
                self.touch();
                ctx.notifier.order_completed(self);
                Ok(self.clone())
            }
            OrderAction::Cancel { customer_id } => {
                if self.customer_id != customer_id {
                    return Err(OrderError::OrderNotFound(self.id.to_string()));
                }
                if self.status != OrderStatus::Pending {
                    return Err(OrderError::InvalidTransition(format!(
                        "only pending orders can be cancelled, status is {:?}",
                        self.status
                    )));
                }
                self.status = OrderStatus::Cancelled;
                self.stage = OrderStage::Cancelled;
                self.touch();
                ctx.notifier.order_cancelled(self);
                Ok(self.clone())
            }
            OrderAction::Rate {
                customer_id,
                rating,
            } => {
                if self.customer_id != customer_id {
                    return Err(OrderError::OrderNotFound(self.id.to_string()));
                }
                if self.status != OrderStatus::Completed {
                    return Err(OrderError::InvalidTransition(
                        "only completed orders can be rated".into(),
                    ));
                }
                if !(1..=5).contains(&rating) {
                    return Err(OrderError::InvalidInput(format!(
                        "rating must be between 1 and 5, got {rating}"
                    )));
                }
                self.rating = Some(rating);
                self.touch();
                Ok(self.clone())
            }
        }
    }

    async fn handle_command(
        store: &mut Store<Self>,
        command: CartCommand,
        ctx: &OrderContext,
    ) -> Result<CartUpdate, OrderError> {
        match command {
            CartCommand::AddItem {
                customer_id,
                restaurant_id,
                item,
                pickup_time,
            } => {
                validate_new_item(&item)?;
                let filter = OrderFilter::open_cart(customer_id.clone());
                if let Some(cart) = store.find_one_mut(&filter) {
                    if cart.has_menu_item(&item.menu_id) {
                        return Err(OrderError::DuplicateItem(item.menu_id.to_string()));
                    }
                    let line = item.into_line_item();
                    cart.total_amount += line.subtotal();
                    cart.items.push(line);
                    cart.touch();
                    return Ok(CartUpdate {
                        order: cart.clone(),
                        created: false,
                    });
                }

                let id = store.mint_id();
                let order = Order::open_cart(
                    id,
                    customer_id,
                    restaurant_id,
                    item.into_line_item(),
                    pickup_time,
                );
                info!(order_id = %order.id, order_code = %order.order_code, "opened new cart");
                let snapshot = order.clone();
                store.insert(order);
                Ok(CartUpdate {
                    order: snapshot,
                    created: true,
                })
            }
            CartCommand::RemoveItem {
                customer_id,
                item_id,
            } => {
                let filter = OrderFilter::open_cart(customer_id.clone());
                let cart = store
                    .find_one_mut(&filter)
                    .ok_or_else(|| OrderError::OrderNotFound(customer_id.to_string()))?;
                let position = cart
                    .line_position(&item_id)
                    .ok_or_else(|| OrderError::ItemNotFound(item_id.to_string()))?;
                let removed = cart.items.remove(position);
                cart.total_amount -= removed.subtotal();
                cart.touch();
                Ok(CartUpdate {
                    order: cart.clone(),
                    created: false,
                })
            }
            CartCommand::ClearItems { customer_id } => {
                let filter = match ctx.cart_lookup {
                    CartLookup::StagePending => OrderFilter::open_cart(customer_id.clone()),
                    CartLookup::PendingOnly => OrderFilter::any_pending(customer_id.clone()),
                };
                // The relaxed policy can match several pending orders; the
                // newest one is the cart.
                let cart = store
                    .find_mut(&filter)
                    .max_by_key(|order| order.created_at)
                    .ok_or_else(|| OrderError::OrderNotFound(customer_id.to_string()))?;
                cart.items.clear();
                cart.total_amount = 0.0;
                cart.touch();
                Ok(CartUpdate {
                    order: cart.clone(),
                    created: false,
                })
            }
            CartCommand::UpdateItemQuantity {
                customer_id,
                item_id,
                quantity,
            } => {
                if quantity == 0 {
                    return Err(OrderError::InvalidInput(
                        "quantity must be at least 1, remove the item instead".into(),
                    ));
                }
                let filter = OrderFilter::open_cart(customer_id.clone());
                let cart = store
                    .find_one_mut(&filter)
                    .ok_or_else(|| OrderError::OrderNotFound(customer_id.to_string()))?;
                let position = cart
                    .line_position(&item_id)
                    .ok_or_else(|| OrderError::ItemNotFound(item_id.to_string()))?;
                cart.items[position].quantity = quantity;
                cart.recompute_total();
                cart.touch();
                Ok(CartUpdate {
                    order: cart.clone(),
                    created: false,
                })
            }
            CartCommand::AdvanceStage {
                customer_id,
                stage,
                pickup_time,
            } => {
                // A customer can hold a placed-but-pending order alongside a
                // fresh cart; the advance targets the newest pending order.
                let filter = OrderFilter::any_pending(customer_id.clone());
                let order = store
                    .find_mut(&filter)
                    .max_by_key(|order| order.created_at)
                    .ok_or_else(|| OrderError::OrderNotFound(customer_id.to_string()))?;
                order.stage = stage;
                if let Some(pickup_time) = pickup_time {
                    order.pickup_time = pickup_time;
                }
                order.touch();
                if stage == OrderStage::PlaceOrder {
                    ctx.notifier.order_placed(order);
                }
                Ok(CartUpdate {
                    order: order.clone(),
                    created: false,
                })
            }
        }
    }
}
