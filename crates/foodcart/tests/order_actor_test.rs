//! Behavioral tests against a real order actor: cart mutation, the
//! single-open-cart rule, lifecycle transitions, and notification firing.

use actor_store::StoreHandle;
use chrono::{Duration, Utc};
use foodcart::clients::OrderClient;
use foodcart::model::{
    CustomerId, MenuId, NewLineItem, Order, OrderStage, OrderStatus, RestaurantId,
};
use foodcart::notify::Notify;
use foodcart::order_actor::{self, CartLookup, OrderContext, OrderError};
use std::sync::{Arc, Mutex};

/// Notifier that records which events fired, for asserting on side effects.
#[derive(Default)]
struct RecordingNotifier {
    events: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Notify for RecordingNotifier {
    fn order_placed(&self, order: &Order) {
        self.events
            .lock()
            .unwrap()
            .push(format!("placed:{}", order.order_code));
    }

    fn order_completed(&self, order: &Order) {
        self.events
            .lock()
            .unwrap()
            .push(format!("completed:{}", order.order_code));
    }

    fn order_cancelled(&self, order: &Order) {
        self.events
            .lock()
            .unwrap()
            .push(format!("cancelled:{}", order.order_code));
    }
}

fn spawn_orders(context: OrderContext) -> OrderClient {
    let (actor, client) = order_actor::new();
    tokio::spawn(actor.run(context));
    client
}

fn line(name: &str, price: f64, quantity: u32) -> NewLineItem {
    NewLineItem {
        menu_id: MenuId::generate(),
        name: name.to_string(),
        image: format!("{name}.jpg"),
        unit_price: price,
        quantity,
    }
}

#[tokio::test]
async fn first_add_opens_cart_later_adds_append() {
    let client = spawn_orders(OrderContext::default());
    let customer = CustomerId::generate();
    let restaurant = RestaurantId::generate();
    let pickup = Utc::now() + Duration::minutes(30);

    let first = client
        .add_to_cart(customer.clone(), restaurant.clone(), line("soup", 6.0, 1), pickup)
        .await
        .unwrap();
    assert!(first.created);
    assert_eq!(first.order.total_amount, 6.0);
    assert_eq!(first.order.stage, OrderStage::AddToCart);
    assert_eq!(first.order.status, OrderStatus::Pending);

    let second = client
        .add_to_cart(customer.clone(), restaurant, line("rice", 3.0, 2), pickup)
        .await
        .unwrap();
    assert!(!second.created);
    assert_eq!(second.order.id, first.order.id);
    assert_eq!(second.order.items.len(), 2);
    assert_eq!(second.order.total_amount, 12.0);
}

#[tokio::test]
async fn duplicate_menu_item_is_rejected() {
    let client = spawn_orders(OrderContext::default());
    let customer = CustomerId::generate();
    let restaurant = RestaurantId::generate();
    let pickup = Utc::now() + Duration::minutes(30);

    let item = line("soup", 6.0, 1);
    let menu_id = item.menu_id.clone();
    client
        .add_to_cart(customer.clone(), restaurant.clone(), item, pickup)
        .await
        .unwrap();

    let dup = NewLineItem {
        menu_id: menu_id.clone(),
        name: "soup".to_string(),
        image: "soup.jpg".to_string(),
        unit_price: 6.0,
        quantity: 3,
    };
    let err = client
        .add_to_cart(customer.clone(), restaurant, dup, pickup)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::DuplicateItem(menu_id.to_string()));

    // The failed add left the cart exactly as it was.
    let cart = client.active_cart(customer).await.unwrap().unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 1);
    assert_eq!(cart.total_amount, 6.0);
}

#[tokio::test]
async fn invalid_line_payloads_are_rejected() {
    let client = spawn_orders(OrderContext::default());
    let customer = CustomerId::generate();
    let restaurant = RestaurantId::generate();
    let pickup = Utc::now();

    let err = client
        .add_to_cart(customer.clone(), restaurant.clone(), line("soup", 6.0, 0), pickup)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidInput(_)));

    let err = client
        .add_to_cart(customer, restaurant, line("soup", -1.0, 1), pickup)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidInput(_)));
}

#[tokio::test]
async fn remove_and_quantity_changes_keep_total_consistent() {
    let client = spawn_orders(OrderContext::default());
    let customer = CustomerId::generate();
    let restaurant = RestaurantId::generate();
    let pickup = Utc::now() + Duration::minutes(30);

    client
        .add_to_cart(customer.clone(), restaurant.clone(), line("soup", 6.0, 1), pickup)
        .await
        .unwrap();
    let cart = client
        .add_to_cart(customer.clone(), restaurant, line("rice", 3.0, 2), pickup)
        .await
        .unwrap()
        .order;
    assert_eq!(cart.total_amount, 12.0);

    let rice_line = cart
        .items
        .iter()
        .find(|l| l.name == "rice")
        .unwrap()
        .id
        .clone();

    let after_bump = client
        .set_item_quantity(customer.clone(), rice_line.clone(), 4)
        .await
        .unwrap();
    assert_eq!(after_bump.total_amount, 18.0);

    let after_remove = client
        .remove_from_cart(customer.clone(), rice_line.clone())
        .await
        .unwrap();
    assert_eq!(after_remove.items.len(), 1);
    assert_eq!(after_remove.total_amount, 6.0);

    let err = client
        .remove_from_cart(customer.clone(), rice_line)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::ItemNotFound(_)));

    let err = client
        .set_item_quantity(
            customer.clone(),
            after_remove.items[0].id.clone(),
            0,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidInput(_)));

    let cleared = client.clear_cart(customer).await.unwrap();
    assert!(cleared.items.is_empty());
    assert_eq!(cleared.total_amount, 0.0);
}

#[tokio::test]
async fn clear_cart_policy_controls_which_orders_qualify() {
    // Default policy only sees carts still in the add-to-cart stage.
    let strict = spawn_orders(OrderContext::default());
    let customer = CustomerId::generate();
    let pickup = Utc::now() + Duration::minutes(30);

    strict
        .add_to_cart(
            customer.clone(),
            RestaurantId::generate(),
            line("soup", 6.0, 1),
            pickup,
        )
        .await
        .unwrap();
    strict
        .advance_stage(customer.clone(), OrderStage::Checkout, None)
        .await
        .unwrap();
    let err = strict.clear_cart(customer).await.unwrap_err();
    assert!(matches!(err, OrderError::OrderNotFound(_)));

    // The relaxed policy accepts any pending order.
    let mut context = OrderContext::default();
    context.cart_lookup = CartLookup::PendingOnly;
    let relaxed = spawn_orders(context);
    let customer = CustomerId::generate();

    relaxed
        .add_to_cart(
            customer.clone(),
            RestaurantId::generate(),
            line("soup", 6.0, 1),
            pickup,
        )
        .await
        .unwrap();
    relaxed
        .advance_stage(customer.clone(), OrderStage::Checkout, None)
        .await
        .unwrap();
    let cleared = relaxed.clear_cart(customer.clone()).await.unwrap();
    assert!(cleared.items.is_empty());
    assert_eq!(cleared.total_amount, 0.0);

    // Clearing an already empty cart is a no-op, not an error.
    let cleared_again = relaxed.clear_cart(customer).await.unwrap();
    assert!(cleared_again.items.is_empty());
    assert_eq!(cleared_again.total_amount, 0.0);
}

#[tokio::test]
async fn placement_fires_notification_and_frees_the_cart_slot() {
    let notifier = Arc::new(RecordingNotifier::default());
    let client = spawn_orders(OrderContext::new(notifier.clone()));
    let customer = CustomerId::generate();
    let restaurant = RestaurantId::generate();
    let pickup = Utc::now() + Duration::minutes(30);

    let cart = client
        .add_to_cart(customer.clone(), restaurant.clone(), line("soup", 6.0, 1), pickup)
        .await
        .unwrap()
        .order;

    client
        .advance_stage(customer.clone(), OrderStage::Checkout, None)
        .await
        .unwrap();
    // Checkout is not placement, nothing fired yet.
    assert!(notifier.events().is_empty());

    let new_pickup = pickup + Duration::minutes(15);
    let placed = client
        .advance_stage(customer.clone(), OrderStage::PlaceOrder, Some(new_pickup))
        .await
        .unwrap();
    assert_eq!(placed.id, cart.id);
    // Advancing touches stage and pickup time only; status stays pending.
    assert_eq!(placed.status, OrderStatus::Pending);
    assert_eq!(placed.pickup_time, new_pickup);
    assert_eq!(notifier.events(), vec![format!("placed:{}", cart.order_code)]);

    let pending = client.pending_orders(customer.clone()).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, cart.id);

    // The placed order no longer matches the open-cart filter, so the next
    // add opens a fresh cart.
    let next = client
        .add_to_cart(customer.clone(), restaurant, line("rice", 3.0, 1), pickup)
        .await
        .unwrap();
    assert!(next.created);
    assert_ne!(next.order.id, cart.id);

    let open = client.active_cart(customer).await.unwrap().unwrap();
    assert_eq!(open.id, next.order.id);
}

#[tokio::test]
async fn pickup_rating_and_cancellation_preconditions() {
    let notifier = Arc::new(RecordingNotifier::default());
    let client = spawn_orders(OrderContext::new(notifier.clone()));
    let customer = CustomerId::generate();
    let pickup = Utc::now() + Duration::minutes(30);

    let order = client
        .add_to_cart(
            customer.clone(),
            RestaurantId::generate(),
            line("soup", 6.0, 1),
            pickup,
        )
        .await
        .unwrap()
        .order;

    // Rating before completion is rejected.
    let err = client
        .rate_order(order.id.clone(), customer.clone(), 5)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidTransition(_)));

    let picked_up = client
        .complete_pickup(order.id.clone(), customer.clone())
        .await
        .unwrap();
    assert_eq!(picked_up.status, OrderStatus::Completed);
    assert_eq!(picked_up.stage, OrderStage::AlreadyPickedUp);

    // A repeat pickup re-applies the same terminal state.
    let again = client
        .complete_pickup(order.id.clone(), customer.clone())
        .await
        .unwrap();
    assert_eq!(again.status, OrderStatus::Completed);
    assert_eq!(again.stage, OrderStage::AlreadyPickedUp);

    // Completed orders cannot be cancelled, and the failed cancel leaves
    // the order in its terminal state.
    let err = client
        .cancel_order(order.id.clone(), customer.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidTransition(_)));
    let unchanged = client.get(order.id.clone()).await.unwrap().unwrap();
    assert_eq!(unchanged.status, OrderStatus::Completed);
    assert_eq!(unchanged.stage, OrderStage::AlreadyPickedUp);

    // Rating bounds.
    let err = client
        .rate_order(order.id.clone(), customer.clone(), 6)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidInput(_)));

    let rated = client
        .rate_order(order.id.clone(), customer.clone(), 4)
        .await
        .unwrap();
    assert_eq!(rated.rating, Some(4));

    assert_eq!(
        notifier.events(),
        vec![
            format!("completed:{}", order.order_code),
            format!("completed:{}", order.order_code),
        ]
    );
}

#[tokio::test]
async fn cancelling_a_pending_order() {
    let notifier = Arc::new(RecordingNotifier::default());
    let client = spawn_orders(OrderContext::new(notifier.clone()));
    let customer = CustomerId::generate();

    let order = client
        .add_to_cart(
            customer.clone(),
            RestaurantId::generate(),
            line("soup", 6.0, 1),
            Utc::now() + Duration::minutes(30),
        )
        .await
        .unwrap()
        .order;

    let cancelled = client
        .cancel_order(order.id.clone(), customer)
        .await
        .unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(cancelled.stage, OrderStage::Cancelled);
    assert_eq!(
        notifier.events(),
        vec![format!("cancelled:{}", order.order_code)]
    );
}

#[tokio::test]
async fn actions_check_ownership_without_leaking_existence() {
    let client = spawn_orders(OrderContext::default());
    let owner = CustomerId::generate();
    let stranger = CustomerId::generate();

    let order = client
        .add_to_cart(
            owner,
            RestaurantId::generate(),
            line("soup", 6.0, 1),
            Utc::now() + Duration::minutes(30),
        )
        .await
        .unwrap()
        .order;

    let err = client
        .cancel_order(order.id.clone(), stranger)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::OrderNotFound(order.id.to_string()));
}

#[tokio::test]
async fn newest_pending_order_wins_when_several_match() {
    let client = spawn_orders(OrderContext::default());
    let customer = CustomerId::generate();
    let restaurant = RestaurantId::generate();
    let pickup = Utc::now() + Duration::minutes(30);

    // Place an order, leaving it pending.
    let placed = client
        .add_to_cart(customer.clone(), restaurant.clone(), line("soup", 6.0, 1), pickup)
        .await
        .unwrap()
        .order;
    client
        .advance_stage(customer.clone(), OrderStage::PlaceOrder, None)
        .await
        .unwrap();

    // Open a fresh cart while the placed order is still pending.
    let cart = client
        .add_to_cart(customer.clone(), restaurant, line("rice", 3.0, 1), pickup)
        .await
        .unwrap();
    assert!(cart.created);

    // Both orders are pending; the advance lands on the newest one.
    let advanced = client
        .advance_stage(customer.clone(), OrderStage::Checkout, None)
        .await
        .unwrap();
    assert_eq!(advanced.id, cart.order.id);
    assert_eq!(advanced.stage, OrderStage::Checkout);

    // The older placed order is untouched.
    let untouched = client.get(placed.id.clone()).await.unwrap().unwrap();
    assert_eq!(untouched.stage, OrderStage::PlaceOrder);

    // And the checkout cart is still the customer's active cart.
    let active = client.active_cart(customer).await.unwrap().unwrap();
    assert_eq!(active.id, cart.order.id);
}

#[tokio::test]
async fn cart_commands_for_absent_customers_report_not_found() {
    let client = spawn_orders(OrderContext::default());
    let nobody = CustomerId::generate();

    let err = client.clear_cart(nobody.clone()).await.unwrap_err();
    assert_eq!(err, OrderError::OrderNotFound(nobody.to_string()));

    let err = client
        .advance_stage(nobody.clone(), OrderStage::Checkout, None)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::OrderNotFound(nobody.to_string()));
}
